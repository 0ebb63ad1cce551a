/// Result of the list walkthrough: final contents and where 30 ended up.
#[derive(Debug, PartialEq, Eq)]
pub struct ListWalkthrough {
    pub items: Vec<i64>,
    pub index_of_30: Option<usize>,
}

pub fn list_walkthrough() -> ListWalkthrough {
    let mut items: Vec<i64> = Vec::new();

    for value in [10, 20, 30, 40] {
        items.push(value);
    }
    log::debug!("after appends: {:?}", items);

    items.insert(1, 15);
    log::debug!("after insert: {:?}", items);

    items.extend_from_slice(&[50, 60, 70]);
    log::debug!("after extend: {:?}", items);

    let popped = items.pop();
    log::debug!("popped {:?}: {:?}", popped, items);

    items.sort_unstable();
    let index_of_30 = items.iter().position(|&v| v == 30);

    ListWalkthrough { items, index_of_30 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_lands_at_index_three() {
        let walk = list_walkthrough();
        assert_eq!(walk.items, vec![10, 15, 20, 30, 40, 50, 60]);
        assert_eq!(walk.index_of_30, Some(3));
    }
}
