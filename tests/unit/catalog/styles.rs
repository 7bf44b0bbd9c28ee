use super::*;
use crate::catalog::keys::Category;
use crate::foundation::core::Rgb8;

fn assert_catalog_complete<K: StyleCatalog>() {
    let keys: Vec<K> = K::ENTRIES.iter().map(|e| e.key).collect();
    assert_eq!(keys.as_slice(), K::ALL, "{:?} catalog order", K::CATEGORY);
    for &k in K::ALL {
        let entry = k.entry().expect("every key has an entry");
        assert!(!entry.name.is_empty());
        assert!(!entry.icon.is_empty());
        assert!(!entry.description.is_empty());
        for c in entry.palette {
            assert!(Rgb8::parse_hex(c).is_ok(), "bad palette color {c}");
        }
    }
}

#[test]
fn catalogs_cover_every_key() {
    assert_catalog_complete::<MaskStyle>();
    assert_catalog_complete::<HairStyle>();
    assert_catalog_complete::<OutfitType>();
    assert_catalog_complete::<AccessoryType>();
}

#[test]
fn mask_and_outfit_entries_suggest_palettes() {
    assert!(MASK_STYLES.iter().all(|e| !e.palette.is_empty()));
    assert!(OUTFIT_TYPES.iter().all(|e| !e.palette.is_empty()));
    assert_eq!(MaskStyle::Cloth.entry().unwrap().palette[0], "#E8E6E1");
    assert_eq!(OutfitType::Hoodie.entry().unwrap().palette[0], "#D4D2CD");
}

#[test]
fn entries_serialize_with_wire_keys() {
    let v = serde_json::to_value(HairStyle::Straight.entry().unwrap()).unwrap();
    assert_eq!(v["key"], serde_json::json!("straight"));
    assert_eq!(HairStyle::CATEGORY, Category::Hair);
}
