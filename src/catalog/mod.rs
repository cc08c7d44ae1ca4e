//! Static SCL-90 item and factor tables.

pub mod factors;
pub mod items;

pub use factors::{FACTORS, Factor, FactorKind, factor, factor_for_item};
pub use items::{ITEM_COUNT, ITEMS, Item, item};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn items_are_numbered_in_order() {
        for (index, item) in ITEMS.iter().enumerate() {
            assert_eq!(usize::from(item.id), index + 1);
            assert!(!item.text.is_empty());
        }
    }

    #[test]
    fn item_lookup_bounds() {
        assert_eq!(item(1).map(|i| i.text), Some("头痛"));
        assert_eq!(item(90).map(|i| i.id), Some(90));
        assert!(item(0).is_none());
        assert!(item(91).is_none());
    }

    #[test]
    fn factors_partition_every_item() {
        let mut seen = HashSet::new();
        for factor in &FACTORS {
            for id in factor.item_ids {
                assert!((1..=90).contains(id), "item {id} out of range");
                assert!(seen.insert(*id), "item {id} claimed twice");
            }
        }
        assert_eq!(seen.len(), ITEM_COUNT);
    }

    #[test]
    fn factor_table_follows_enum_order() {
        for f in &FACTORS {
            assert_eq!(factor(f.kind).name, f.name);
        }
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(factor_for_item(1).kind, FactorKind::Somatization);
        assert_eq!(factor_for_item(90).kind, FactorKind::Psychoticism);
        assert_eq!(factor_for_item(89).kind, FactorKind::Other);
        assert_eq!(factor_for_item(200).kind, FactorKind::Other);
    }
}
