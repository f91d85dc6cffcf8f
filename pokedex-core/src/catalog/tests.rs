//! Tests for the catalog module

#[cfg(test)]
mod catalog_tests {
    use crate::catalog::{filter, resolve, Catalog, DetailSet, Entry};
    use crate::error::PokedexError;
    use pretty_assertions::assert_eq;

    fn sample_catalog() -> Catalog {
        Catalog::from_entries(vec![
            Entry::new(1, "Bisasam"),
            Entry::new(2, "Bisaknosp"),
            Entry::new(25, "Pikachu"),
        ])
        .unwrap()
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = Catalog::from_json(
            r#"[
  { "id": 1, "name": "Bisasam" },
  { "id": 4, "name": "Glumanda" }
]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(4).unwrap().name, "Glumanda");
        assert!(catalog.get(4).unwrap().sub_items.is_empty());
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::from_entries(vec![Entry::new(1, "Bisasam"), Entry::new(1, "Other")]);
        assert!(matches!(result, Err(PokedexError::InvalidCatalog(_))));
    }

    #[test]
    fn test_catalog_rejects_blank_name_and_zero_id() {
        assert!(Catalog::from_entries(vec![Entry::new(3, "   ")]).is_err());
        assert!(Catalog::from_entries(vec![Entry::new(0, "Missingno")]).is_err());
    }

    #[test]
    fn test_filter_scenario_bisa() {
        let catalog = sample_catalog();
        let view = filter(&catalog, "bisa");

        assert_eq!(view.ids(), vec![1, 2]);
        assert_eq!(view.get(0).unwrap().name, "Bisasam");
        assert_eq!(view.query(), "bisa");
    }

    #[test]
    fn test_filter_empty_and_whitespace_return_everything() {
        let catalog = sample_catalog();

        assert_eq!(filter(&catalog, "").ids(), vec![1, 2, 25]);
        assert_eq!(filter(&catalog, "   ").ids(), vec![1, 2, 25]);
        assert!(filter(&catalog, "\t").is_unfiltered());
    }

    #[test]
    fn test_filter_trims_and_ignores_case() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, "  PIKA ").ids(), vec![25]);
    }

    #[test]
    fn test_filter_unicode_names() {
        let catalog = Catalog::from_entries(vec![
            Entry::new(29, "Nidoran♀"),
            Entry::new(122, "Pantimos"),
            Entry::new(474, "Porygon-Z"),
            Entry::new(999, "Ärgerling"),
        ])
        .unwrap();

        assert_eq!(filter(&catalog, "är").ids(), vec![999]);
        assert_eq!(filter(&catalog, "ÄRGER").ids(), vec![999]);
        assert_eq!(filter(&catalog, "♀").ids(), vec![29]);
    }

    #[test]
    fn test_filter_no_match_is_empty_view() {
        let view = filter(&sample_catalog(), "zzz");
        assert!(view.is_empty());
        assert_eq!(view.get(0), None);
    }

    #[test]
    fn test_catalog_resolve() {
        let catalog = sample_catalog();

        assert_eq!(catalog.resolve("25").unwrap().name, "Pikachu");
        assert_eq!(catalog.resolve(" 2 ").unwrap().id, 2);
        assert_eq!(catalog.resolve("abc").unwrap_err().key, "abc");
        assert!(catalog.resolve("-1").is_err());
        assert!(catalog.resolve("3").is_err());
    }

    #[test]
    fn test_detail_resolve() {
        let details = DetailSet::from_json(
            r#"[
  {
    "id": 2,
    "name": { "de": "Bisaknosp", "en": "Ivysaur" },
    "cards": [
      { "name": "Bisaknosp 002/165", "imageUrl": "https://images.example/sv3pt5/2.png" },
      { "name": "Bisaknosp 167/165", "imageUrl": "https://images.example/sv3pt5/167.png" }
    ]
  }
]"#,
        )
        .unwrap();

        let record = resolve(&details, "2").unwrap();
        assert_eq!(record.display_name("de", "en"), "Bisaknosp");
        assert_eq!(record.cards.len(), 2);
        assert_eq!(record.cards[1].image_url, "https://images.example/sv3pt5/167.png");

        assert!(resolve(&details, "abc").is_err());
        assert!(resolve(&details, "7").is_err());
    }

    #[test]
    fn test_detail_display_name_fallbacks() {
        let details = DetailSet::from_json(
            r#"[{ "id": 151, "name": { "en": "Mew" } }, { "id": 152, "name": {} }]"#,
        )
        .unwrap();

        assert_eq!(resolve(&details, "151").unwrap().display_name("de", "en"), "Mew");
        assert_eq!(resolve(&details, "152").unwrap().display_name("de", "en"), "#152");
        assert!(resolve(&details, "151").unwrap().cards.is_empty());
    }
}
