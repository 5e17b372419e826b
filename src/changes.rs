use serde::{Serialize, Deserialize};

///
/// A single property transition: the value before the change and the value
/// after it, captured together at the moment the property changed
///
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ValueChange<TValue> {
    old_value:  TValue,
    new_value:  TValue
}

impl<TValue> ValueChange<TValue> {
    ///
    /// Creates a change record from the value before and after a transition
    ///
    pub fn new(old_value: TValue, new_value: TValue) -> ValueChange<TValue> {
        ValueChange {
            old_value:  old_value,
            new_value:  new_value
        }
    }

    ///
    /// The value the property held before this transition
    ///
    pub fn old_value(&self) -> &TValue {
        &self.old_value
    }

    ///
    /// The value the property holds after this transition
    ///
    pub fn new_value(&self) -> &TValue {
        &self.new_value
    }

    ///
    /// Discards the old value and returns the new one
    ///
    pub fn into_new_value(self) -> TValue {
        self.new_value
    }
}

///
/// One element-level change in an observable list
///
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub enum ListChange<TValue> {
    /// The element was added to the list
    Added(TValue),

    /// The element was removed from the list
    Removed(TValue),

    /// The element changed in place
    Updated(TValue)
}

impl<TValue> ListChange<TValue> {
    ///
    /// The element this change applies to
    ///
    pub fn value(&self) -> &TValue {
        match self {
            ListChange::Added(value)    => value,
            ListChange::Removed(value)  => value,
            ListChange::Updated(value)  => value
        }
    }
}

///
/// One contiguous run of changes within a mutation batch
///
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub enum ListDelta<TItem> {
    /// Elements removed and elements added at the same position (either side
    /// may be empty: a plain insertion has no removals, a plain removal has
    /// no additions, a replacement has both)
    Spliced { removed: Vec<TItem>, added: Vec<TItem> },

    /// Elements whose value changed in place, without moving
    Updated(Vec<TItem>)
}

///
/// A single mutation notification from an observable list
///
/// A batch bundles every element-level change made by one mutation, in the
/// order the list reports them, along with the contents of the list once the
/// batch has been applied.
///
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ListChangeBatch<TItem> {
    /// The changes in this batch, in reported order
    deltas:     Vec<ListDelta<TItem>>,

    /// The contents of the list after this batch
    contents:   Vec<TItem>
}

impl<TItem> ListChangeBatch<TItem> {
    ///
    /// Creates a batch from its deltas and the list contents after the batch
    ///
    pub fn new(deltas: Vec<ListDelta<TItem>>, contents: Vec<TItem>) -> ListChangeBatch<TItem> {
        ListChangeBatch {
            deltas:     deltas,
            contents:   contents
        }
    }

    ///
    /// The changes in this batch, in the order the list reported them
    ///
    pub fn deltas(&self) -> &[ListDelta<TItem>] {
        &self.deltas
    }

    ///
    /// The contents of the list after this batch was applied
    ///
    pub fn contents(&self) -> &[TItem] {
        &self.contents
    }

    ///
    /// The elements added by this batch, in the order they were added
    ///
    pub fn added(&self) -> impl Iterator<Item=&TItem> {
        self.deltas.iter()
            .flat_map(|delta| match delta {
                ListDelta::Spliced { added, .. }    => added.as_slice(),
                ListDelta::Updated(_)               => &[]
            })
    }

    ///
    /// The elements removed by this batch, in the order they were removed
    ///
    pub fn removed(&self) -> impl Iterator<Item=&TItem> {
        self.deltas.iter()
            .flat_map(|delta| match delta {
                ListDelta::Spliced { removed, .. }  => removed.as_slice(),
                ListDelta::Updated(_)               => &[]
            })
    }

    ///
    /// The elements updated in place by this batch, in affected order
    ///
    pub fn updated(&self) -> impl Iterator<Item=&TItem> {
        self.deltas.iter()
            .flat_map(|delta| match delta {
                ListDelta::Spliced { .. }       => &[],
                ListDelta::Updated(updated)     => updated.as_slice()
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn value_change_keeps_both_values() {
        let change = ValueChange::new(5, 7);

        assert!(change.old_value() == &5);
        assert!(change.new_value() == &7);
        assert!(change.into_new_value() == 7);
    }

    #[test]
    fn list_changes_expose_their_value() {
        assert!(ListChange::Added(1).value() == &1);
        assert!(ListChange::Removed(2).value() == &2);
        assert!(ListChange::Updated(3).value() == &3);
    }

    #[test]
    fn batch_iterates_changes_in_reported_order() {
        let batch = ListChangeBatch::new(vec![
            ListDelta::Spliced { removed: vec![1], added: vec![2, 3] },
            ListDelta::Updated(vec![4]),
            ListDelta::Spliced { removed: vec![5, 6], added: vec![] }
        ], vec![2, 3, 4]);

        assert!(batch.added().cloned().collect::<Vec<_>>() == vec![2, 3]);
        assert!(batch.removed().cloned().collect::<Vec<_>>() == vec![1, 5, 6]);
        assert!(batch.updated().cloned().collect::<Vec<_>>() == vec![4]);
    }
}
