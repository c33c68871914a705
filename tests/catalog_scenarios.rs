//! End-to-end scenarios over the built-in catalog
//!
//! Each module mirrors one page of the guide: the queries it issues and
//! the figures it displays.

use sanctuary::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn catalog() -> &'static Catalog {
    Catalog::shared().unwrap()
}

fn ids<T: Record>(collection: &Collection<T>) -> Vec<String> {
    collection.ids()
}

// =============================================================================
// Monasteries
// =============================================================================

mod monastery_page {
    use super::*;

    #[test]
    fn test_sect_dropdown() {
        let sects = list_distinct_values(&catalog().monasteries, "sect");
        assert_eq!(sects, vec![FieldValue::from("Kagyu"), FieldValue::from("Nyingma")]);
    }

    #[test]
    fn test_nyingma_in_catalog_order() {
        let spec = FilterSpec::for_record::<Monastery>().with_equals("sect", "Nyingma");
        let nyingma = filter(&catalog().monasteries, &spec);

        assert_eq!(ids(&nyingma), vec!["pemayangste", "tashiding", "enchey"]);
    }

    #[test]
    fn test_all_sect_is_no_constraint() {
        let spec = FilterSpec::for_record::<Monastery>().with_equals("sect", ALL);
        let everything = filter(&catalog().monasteries, &spec);

        assert_eq!(everything, catalog().monasteries);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let spec = FilterSpec::for_record::<Monastery>().with_text("DHARMA");
        assert_eq!(ids(&filter(&catalog().monasteries, &spec)), vec!["rumtek"]);
    }

    #[test]
    fn test_search_reaches_list_fields() {
        let spec = FilterSpec::for_record::<Monastery>().with_text("flying lama");
        assert_eq!(ids(&filter(&catalog().monasteries, &spec)), vec!["enchey"]);
    }

    #[test]
    fn test_audio_guide_language() {
        let spec = FilterSpec::for_record::<Monastery>().with_equals("audio_guides", "Tibetan");
        assert_eq!(
            ids(&filter(&catalog().monasteries, &spec)),
            vec!["rumtek", "enchey"]
        );
    }

    #[test]
    fn test_json_filter_form() {
        let spec = FilterSpec::from_json(&json!({"sect": "all", "location": "West Sikkim"}));
        assert_eq!(
            ids(&filter(&catalog().monasteries, &spec)),
            vec!["pemayangste", "tashiding"]
        );
    }

    #[test]
    fn test_oldest_first() {
        let spec = FilterSpec::new().sorted_by("founded:asc");
        assert_eq!(
            ids(&filter(&catalog().monasteries, &spec)),
            vec!["tashiding", "pemayangste", "enchey", "rumtek"]
        );
    }

    #[test]
    fn test_stat_cards() {
        let report = aggregate(
            &catalog().monasteries,
            &[
                AggregateRequest::count(),
                AggregateRequest::sum("monks"),
                AggregateRequest::min("founded"),
                AggregateRequest::max("founded"),
                AggregateRequest::range("founded"),
            ],
        )
        .unwrap();

        assert_eq!(report.get(&AggregateRequest::count()), Some(Scalar::Count(4)));
        assert_eq!(report.get(&AggregateRequest::sum("monks")), Some(Scalar::Integer(573)));
        assert_eq!(report.get(&AggregateRequest::min("founded")), Some(Scalar::Integer(1641)));
        assert_eq!(report.get(&AggregateRequest::max("founded")), Some(Scalar::Integer(1966)));
        assert_eq!(report.get(&AggregateRequest::range("founded")), Some(Scalar::Integer(325)));
    }

    #[test]
    fn test_nyingma_monks() {
        let spec = FilterSpec::for_record::<Monastery>().with_equals("sect", "Nyingma");
        let nyingma = filter(&catalog().monasteries, &spec);

        let total = aggregate_one(&nyingma, &AggregateRequest::sum("monks")).unwrap();
        assert_eq!(total, Scalar::Integer(273));
    }

    #[test]
    fn test_detail_lookup() {
        let rumtek = catalog().monasteries.get("rumtek").unwrap();
        assert_eq!(rumtek.sect, "Kagyu");
        assert!(catalog().monasteries.find("gonjang").is_none());
    }
}

// =============================================================================
// Map
// =============================================================================

mod map_page {
    use super::*;

    #[test]
    fn test_district_counts() {
        let summary = summarize(
            &catalog().monasteries,
            &["location", "sect"],
            &[AggregateRequest::range("founded")],
        )
        .unwrap();

        assert_eq!(summary.total, 4);

        let districts = summary.category("location");
        assert_eq!(districts.len(), 2);
        assert_eq!(districts[0].value, FieldValue::from("East Sikkim"));
        assert_eq!(districts[0].count, 2);
        assert_eq!(districts[1].value, FieldValue::from("West Sikkim"));
        assert_eq!(districts[1].count, 2);

        let sects = summary.category("sect");
        assert_eq!(sects[1].count, 3);
        assert!(summary.category("altitude").is_empty());

        assert_eq!(
            summary.aggregates.get(&AggregateRequest::range("founded")),
            Some(Scalar::Integer(325))
        );
    }
}

// =============================================================================
// Festivals
// =============================================================================

mod festival_page {
    use super::*;

    #[test]
    fn test_upcoming() {
        let spec = FilterSpec::for_record::<Festival>().with_equals("upcoming", true);
        assert_eq!(ids(&filter(&catalog().festivals, &spec)), vec!["bumchu"]);

        let upcoming = aggregate_one(&catalog().festivals, &AggregateRequest::count_true("upcoming"))
            .unwrap();
        assert_eq!(upcoming, Scalar::Count(1));
    }

    #[test]
    fn test_other_festivals() {
        let others = related(&catalog().festivals, "losar", 3);
        assert_eq!(ids(&others), vec!["saga-dawa", "bumchu", "chaam"]);

        let fewer = related(&catalog().festivals, "bumchu", 2);
        assert_eq!(ids(&fewer), vec!["losar", "saga-dawa"]);
    }

    #[test]
    fn test_monastery_participation() {
        let report = aggregate(
            &catalog().festivals,
            &[
                AggregateRequest::sum("monasteries"),
                AggregateRequest::min("monasteries"),
                AggregateRequest::count_distinct("duration"),
            ],
        )
        .unwrap();

        assert_eq!(report.get(&AggregateRequest::sum("monasteries")), Some(Scalar::Integer(17)));
        assert_eq!(report.get(&AggregateRequest::min("monasteries")), Some(Scalar::Integer(1)));
        assert_eq!(
            report.get(&AggregateRequest::count_distinct("duration")),
            Some(Scalar::Count(2))
        );
    }
}

// =============================================================================
// Manuscripts
// =============================================================================

mod manuscript_page {
    use super::*;

    #[test]
    fn test_search_and_toggle() {
        let spec = FilterSpec::for_record::<Manuscript>()
            .with_text("sutra")
            .with_equals("digitized", true);
        assert_eq!(ids(&filter(&catalog().manuscripts, &spec)), vec!["1", "2"]);
    }

    #[test]
    fn test_not_yet_digitized() {
        let spec = FilterSpec::for_record::<Manuscript>().with_equals("digitized", false);
        assert_eq!(ids(&filter(&catalog().manuscripts, &spec)), vec!["3", "6"]);
    }

    #[test]
    fn test_combined_dropdowns() {
        let spec = FilterSpec::for_record::<Manuscript>()
            .with_equals("category", "Sutra")
            .with_equals("language", "Sanskrit");
        assert_eq!(ids(&filter(&catalog().manuscripts, &spec)), vec!["2"]);
    }

    #[test]
    fn test_collection_stats() {
        let report = aggregate(
            &catalog().manuscripts,
            &[
                AggregateRequest::count_true("digitized"),
                AggregateRequest::sum("pages"),
                AggregateRequest::count_distinct("language"),
            ],
        )
        .unwrap();

        assert_eq!(report.get(&AggregateRequest::count_true("digitized")), Some(Scalar::Count(4)));
        assert_eq!(report.get(&AggregateRequest::sum("pages")), Some(Scalar::Integer(1044)));
        assert_eq!(
            report.get(&AggregateRequest::count_distinct("language")),
            Some(Scalar::Count(2))
        );
    }

    #[test]
    fn test_view_increments_views_only() {
        let before = &catalog().manuscripts;
        let after = increment_counter(before, "3", "views").unwrap();

        let viewed = after.get("3").unwrap();
        assert_eq!(viewed.views, 4568);
        assert_eq!(viewed.likes, 324);
        assert_eq!(before.get("3").unwrap().views, 4567);
    }
}

// =============================================================================
// Stories
// =============================================================================

mod story_page {
    use super::*;

    #[test]
    fn test_newest_first() {
        let spec = FilterSpec::for_record::<Story>().with_sort(SortSpec::desc("date"));
        assert_eq!(ids(&filter(&catalog().stories, &spec)), vec!["1", "2", "3"]);

        let spec = FilterSpec::for_record::<Story>().with_sort(SortSpec::asc("date"));
        assert_eq!(ids(&filter(&catalog().stories, &spec)), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_most_liked() {
        let spec = FilterSpec::new().sorted_by("likes:desc");
        assert_eq!(ids(&filter(&catalog().stories, &spec)), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_category_and_search() {
        let spec = FilterSpec::for_record::<Story>().with_equals("category", "experience");
        assert_eq!(ids(&filter(&catalog().stories, &spec)), vec!["1", "3"]);

        let spec = FilterSpec::for_record::<Story>().with_text("gangtok");
        assert_eq!(ids(&filter(&catalog().stories, &spec)), vec!["1"]);
    }

    #[test]
    fn test_json_filter_with_iso_strings() {
        let by_date = FilterSpec::from_json(&json!({"date": "2024-01-10"}));
        assert_eq!(ids(&filter(&catalog().stories, &by_date)), vec!["2"]);

        let titled = Collection::new(vec![
            DynamicRecord::new("a").with("title", "2024-01-15"),
            DynamicRecord::new("b").with("title", "Losar"),
        ]);
        let by_title = FilterSpec::from_json(&json!({"title": "2024-01-15"}));
        assert_eq!(ids(&filter(&titled, &by_title)), vec!["a"]);
    }

    #[test]
    fn test_like_shares_untouched_stories() {
        let before = &catalog().stories;
        let after = increment_counter(before, "1", "likes").unwrap();

        assert_eq!(after.get("1").unwrap().likes, 157);
        assert_eq!(before.get("1").unwrap().likes, 156);

        assert!(!Arc::ptr_eq(&before.records()[0], &after.records()[0]));
        assert!(Arc::ptr_eq(&before.records()[1], &after.records()[1]));
        assert!(Arc::ptr_eq(&before.records()[2], &after.records()[2]));
    }

    #[test]
    fn test_repeated_likes_accumulate() {
        let once = increment_counter(&catalog().stories, "2", "likes").unwrap();
        let twice = increment_counter(&once, "2", "likes").unwrap();
        assert_eq!(twice.get("2").unwrap().likes, 96);
    }
}
