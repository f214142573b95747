use gallery::{CategorizedMediaState, GalleryError, LocalFile, MediaItem};
use payloads::{
    CategoryId, CategoryPhotos, GalleryConfig, GalleryPayload, MAX_IMAGE_SIZE,
};

fn image(name: &str, size: u64) -> LocalFile<()> {
    LocalFile::new(name, size, "image/jpeg", ())
}

fn bathroom() -> CategoryId {
    CategoryId::from("bathroom")
}

fn names(state: &CategorizedMediaState<()>, category: &CategoryId) -> Vec<String> {
    state
        .items(category)
        .unwrap()
        .iter()
        .map(|item| item.display_name().to_string())
        .collect()
}

#[test]
fn test_new_state_has_every_category_empty() {
    let config = GalleryConfig::residential();
    let state = CategorizedMediaState::<()>::new(&config);
    assert_eq!(state.categories().len(), 7);
    for category in &config.categories {
        assert_eq!(state.items(&category.id).unwrap().len(), 0);
    }
    assert!(state.is_empty());

    let commercial = CategorizedMediaState::<()>::new(&GalleryConfig::commercial());
    assert_eq!(commercial.categories().len(), 3);
}

#[test]
fn test_selected_files_keep_selection_order() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let outcome = state.select_files(
        &bathroom(),
        vec![image("a.jpg", 100), image("b.jpg", 200), image("c.jpg", 300)],
        5,
    )?;
    assert_eq!(outcome.added, 3);
    assert!(outcome.duplicates.is_empty());
    assert_eq!(names(&outcome.state, &bathroom()), ["a.jpg", "b.jpg", "c.jpg"]);
    // the original value is left alone
    assert!(state.is_empty());
    Ok(())
}

#[test]
fn test_duplicate_name_and_size_is_rejected() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let state = state
        .select_files(&bathroom(), vec![image("a.jpg", 1000)], 5)?
        .state;

    let outcome =
        state.select_files(&bathroom(), vec![image("a.jpg", 1000)], 5)?;
    assert_eq!(outcome.added, 0);
    assert_eq!(outcome.duplicates, ["a.jpg"]);
    assert_eq!(outcome.state.items(&bathroom()).unwrap().len(), 1);
    Ok(())
}

#[test]
fn test_same_name_with_different_size_is_not_a_duplicate() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let state = state
        .select_files(&bathroom(), vec![image("a.jpg", 1000)], 5)?
        .state;
    let outcome =
        state.select_files(&bathroom(), vec![image("a.jpg", 1001)], 5)?;
    assert_eq!(outcome.added, 1);
    assert!(outcome.duplicates.is_empty());
    Ok(())
}

#[test]
fn test_duplicates_are_checked_per_category() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let state = state
        .select_files(&bathroom(), vec![image("a.jpg", 1000)], 5)?
        .state;
    let outcome = state.select_files(
        &CategoryId::from("kitchen"),
        vec![image("a.jpg", 1000)],
        5,
    )?;
    assert_eq!(outcome.added, 1);
    assert!(outcome.duplicates.is_empty());
    Ok(())
}

#[test]
fn test_repeated_file_within_one_batch_is_reported() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let outcome = state.select_files(
        &bathroom(),
        vec![image("a.jpg", 10), image("a.jpg", 10), image("a.jpg", 10)],
        5,
    )?;
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.duplicates.len(), 2);
    Ok(())
}

#[test]
fn test_files_over_the_cap_are_dropped_without_notice() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let state = state
        .select_files(
            &bathroom(),
            (0..4).map(|i| image(&format!("{i}.jpg"), 100)).collect(),
            5,
        )?
        .state;

    let outcome = state.select_files(
        &bathroom(),
        vec![image("x.jpg", 1), image("y.jpg", 2), image("z.jpg", 3)],
        5,
    )?;
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.overflow, 2);
    assert!(outcome.duplicates.is_empty());
    assert_eq!(
        names(&outcome.state, &bathroom()),
        ["0.jpg", "1.jpg", "2.jpg", "3.jpg", "x.jpg"]
    );
    Ok(())
}

#[test]
fn test_category_never_exceeds_cap() -> anyhow::Result<()> {
    let config = GalleryConfig::residential().with_limit(3);
    let mut state = CategorizedMediaState::new(&config);
    for batch in 0..6 {
        let files = (0..batch)
            .map(|i| image(&format!("{batch}-{i}.jpg"), 100 + i))
            .collect();
        state = state
            .select_files(&bathroom(), files, config.max_per_category)?
            .state;
        assert!(state.items(&bathroom()).unwrap().len() <= 3);
    }
    assert_eq!(state.items(&bathroom()).unwrap().len(), 3);
    Ok(())
}

#[test]
fn test_oversized_and_non_image_files_are_filtered() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let outcome = state.select_files(
        &bathroom(),
        vec![
            image("big.jpg", 6 * 1024 * 1024),
            LocalFile::new("notes.pdf", 100, "application/pdf", ()),
            LocalFile::new("clip.mp4", 100, "video/mp4", ()),
        ],
        5,
    )?;
    assert_eq!(outcome.added, 0);
    assert_eq!(outcome.filtered, 3);
    assert!(outcome.duplicates.is_empty());
    assert!(outcome.state.is_empty());

    // exactly at the limit is fine
    let outcome = state.select_files(
        &bathroom(),
        vec![image("edge.jpg", MAX_IMAGE_SIZE)],
        5,
    )?;
    assert_eq!(outcome.added, 1);
    Ok(())
}

#[test]
fn test_only_the_target_category_changes() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let kitchen = CategoryId::from("kitchen");
    let state = state
        .select_files(&kitchen, vec![image("k.jpg", 1)], 5)?
        .state;
    let next = state
        .select_files(&bathroom(), vec![image("b.jpg", 1)], 5)?
        .state;
    assert_eq!(next.items(&kitchen), state.items(&kitchen));
    assert_eq!(next.len(), 2);
    Ok(())
}

#[test]
fn test_unknown_category_is_an_error() {
    let state = CategorizedMediaState::new(&GalleryConfig::commercial());
    let err = state
        .select_files(&bathroom(), vec![image("a.jpg", 1)], 5)
        .unwrap_err();
    assert_eq!(err, GalleryError::UnknownCategory(bathroom()));
}

#[test]
fn test_remove_shifts_later_items_down() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let state = state
        .select_files(
            &bathroom(),
            vec![image("a.jpg", 1), image("b.jpg", 2), image("c.jpg", 3)],
            5,
        )?
        .state;

    let removal = state.remove_item(&bathroom(), 1)?;
    assert_eq!(removal.removed.display_name(), "b.jpg");
    assert_eq!(names(&removal.state, &bathroom()), ["a.jpg", "c.jpg"]);
    Ok(())
}

#[test]
fn test_remove_out_of_bounds_is_an_error() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let state = state
        .select_files(&bathroom(), vec![image("a.jpg", 1)], 5)?
        .state;
    let err = state.remove_item(&bathroom(), 1).unwrap_err();
    assert_eq!(
        err,
        GalleryError::IndexOutOfBounds {
            category: bathroom(),
            index: 1,
            len: 1,
        }
    );
    Ok(())
}

#[test]
fn test_payload_flattens_in_declared_category_order() -> anyhow::Result<()> {
    let config = GalleryConfig::residential();
    let state = CategorizedMediaState::new(&config);
    // kitchen is declared after bathroom; select it first anyway
    let state = state
        .select_files(&CategoryId::from("kitchen"), vec![image("k.jpg", 1)], 5)?
        .state;
    let state = state
        .select_files(&bathroom(), vec![image("b.jpg", 1)], 5)?
        .state;

    assert_eq!(
        state.to_payload(None).unwrap_err(),
        GalleryError::PendingUploads(2)
    );

    let keys: Vec<_> = state.local_files().map(|f| (f.key, f.name.clone())).collect();
    let mut uploaded = state.clone();
    for (key, name) in keys {
        uploaded = uploaded.with_uploaded(key, &format!("https://cdn.test/{name}"));
    }

    let payload = uploaded.to_payload(Some("https://video.test/tour".into()))?;
    assert_eq!(
        payload.photos,
        ["https://cdn.test/b.jpg", "https://cdn.test/k.jpg"]
    );
    assert_eq!(payload.categorized.len(), 7);
    assert_eq!(payload.urls_for(&bathroom()), ["https://cdn.test/b.jpg"]);
    assert_eq!(payload.video.as_deref(), Some("https://video.test/tour"));
    Ok(())
}

#[test]
fn test_uploading_keeps_item_position() -> anyhow::Result<()> {
    let state = CategorizedMediaState::new(&GalleryConfig::residential());
    let state = state
        .select_files(
            &bathroom(),
            vec![image("a.jpg", 1), image("b.jpg", 2), image("c.jpg", 3)],
            5,
        )?
        .state;
    let middle = state.items(&bathroom()).unwrap()[1].local_key().unwrap();
    let state = state.with_uploaded(middle, "https://cdn.test/b.jpg");
    let items = state.items(&bathroom()).unwrap();
    assert!(!items[0].is_persisted());
    assert_eq!(items[1], MediaItem::Persisted("https://cdn.test/b.jpg".into()));
    assert!(!items[2].is_persisted());
    assert_eq!(state.local_files().count(), 2);
    Ok(())
}

#[test]
fn test_resumed_gallery_respects_config() {
    let config = GalleryConfig::commercial().with_limit(2);
    let payload = GalleryPayload::from_categorized(
        vec![
            CategoryPhotos {
                category: CategoryId::from("frontView"),
                urls: vec!["u1".into(), "u2".into(), "u3".into()],
            },
            CategoryPhotos {
                category: CategoryId::from("bathroom"),
                urls: vec!["u4".into()],
            },
        ],
        None,
    );
    let state = CategorizedMediaState::<()>::from_payload(&config, &payload);
    assert_eq!(state.categories().len(), 3);
    assert_eq!(
        state.items(&CategoryId::from("frontView")).unwrap(),
        [
            MediaItem::Persisted("u1".into()),
            MediaItem::Persisted("u2".into())
        ]
    );
    assert!(state.items(&bathroom()).is_none());
    assert_eq!(state.len(), 2);
}

#[test]
fn test_legacy_flat_gallery_lands_in_last_category() {
    let config = GalleryConfig::residential();
    let payload = GalleryPayload {
        categorized: Vec::new(),
        photos: vec!["u1".into(), "u2".into()],
        video: None,
    };
    let state = CategorizedMediaState::<()>::from_payload(&config, &payload);
    assert_eq!(state.items(&CategoryId::from("others")).unwrap().len(), 2);
    assert_eq!(state.len(), 2);
}

#[test]
fn test_persisted_items_never_count_as_duplicates() -> anyhow::Result<()> {
    let config = GalleryConfig::residential();
    let payload = GalleryPayload::from_categorized(
        vec![CategoryPhotos {
            category: bathroom(),
            urls: vec!["https://cdn.test/a.jpg".into()],
        }],
        None,
    );
    let state = CategorizedMediaState::<()>::from_payload(&config, &payload);
    let outcome = state.select_files(&bathroom(), vec![image("a.jpg", 10)], 5)?;
    assert_eq!(outcome.added, 1);
    assert_eq!(names(&outcome.state, &bathroom()), ["a.jpg", "a.jpg"]);
    Ok(())
}

#[test]
fn test_legacy_gallery_over_the_cap_survives_resume_and_save() -> anyhow::Result<()> {
    let config = GalleryConfig::residential();
    let urls: Vec<String> = (1..=8).map(|i| format!("https://cdn.test/{i}.jpg")).collect();
    let payload = GalleryPayload {
        categorized: Vec::new(),
        photos: urls.clone(),
        video: None,
    };

    let state = CategorizedMediaState::<()>::from_payload(&config, &payload);
    let others = CategoryId::from("others");
    assert_eq!(state.items(&others).unwrap().len(), config.max_per_category);
    assert_eq!(state.carried_count(), 3);

    let saved = state.to_payload(None)?;
    assert_eq!(saved.photos, urls);
    assert_eq!(saved.urls_for(&others), urls.as_slice());

    // a second resume from the categorized form is just as lossless
    let again = CategorizedMediaState::<()>::from_payload(&config, &saved);
    assert_eq!(again.to_payload(None)?.photos, urls);
    Ok(())
}

#[test]
fn test_hidden_photos_are_written_back() -> anyhow::Result<()> {
    let config = GalleryConfig::commercial().with_limit(2);
    let payload = GalleryPayload::from_categorized(
        vec![
            CategoryPhotos {
                category: CategoryId::from("frontView"),
                urls: vec!["u1".into(), "u2".into(), "u3".into()],
            },
            CategoryPhotos {
                category: bathroom(),
                urls: vec!["u4".into()],
            },
        ],
        None,
    );
    let state = CategorizedMediaState::<()>::from_payload(&config, &payload);
    assert_eq!(state.len(), 2);
    assert_eq!(state.carried_count(), 2);

    // removing a shown photo doesn't disturb the carried ones
    let state = state.remove_item(&CategoryId::from("frontView"), 0)?.state;
    let saved = state.to_payload(None)?;
    assert_eq!(
        saved.urls_for(&CategoryId::from("frontView")),
        ["u2".to_string(), "u3".to_string()]
    );
    assert_eq!(saved.urls_for(&bathroom()), ["u4".to_string()]);
    assert_eq!(saved.photo_count(), 3);
    Ok(())
}
