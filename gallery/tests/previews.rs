use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use gallery::{
    CategorizedMediaState, LocalFile, MediaItem, MediaUpload, PreviewError,
    PreviewSource,
};
use payloads::{CategoryId, CategoryPhotos, GalleryConfig, GalleryPayload};

/// Hands out fake object urls and tracks which are still live.
#[derive(Clone, Default)]
struct ObjectUrls {
    live: Rc<RefCell<HashSet<String>>>,
    created: Rc<Cell<usize>>,
}

impl ObjectUrls {
    fn live(&self) -> usize {
        self.live.borrow().len()
    }
}

impl PreviewSource<()> for ObjectUrls {
    fn create(&mut self, file: &LocalFile<()>) -> Result<String, PreviewError> {
        self.created.set(self.created.get() + 1);
        let url = format!("blob:test/{}/{}", self.created.get(), file.name);
        self.live.borrow_mut().insert(url.clone());
        Ok(url)
    }

    fn release(&mut self, handle: &str) {
        let was_live = self.live.borrow_mut().remove(handle);
        assert!(was_live, "released unknown or already released {handle}");
    }
}

fn image(name: &str, size: u64) -> LocalFile<()> {
    LocalFile::new(name, size, "image/png", ())
}

fn bathroom() -> CategoryId {
    CategoryId::from("bathroom")
}

fn kitchen() -> CategoryId {
    CategoryId::from("kitchen")
}

fn uploader() -> (MediaUpload<(), ObjectUrls>, ObjectUrls) {
    let urls = ObjectUrls::default();
    (
        MediaUpload::new(GalleryConfig::residential(), urls.clone()),
        urls,
    )
}

/// Render every item once, the way the widget does.
fn preview_all(
    upload: &mut MediaUpload<(), ObjectUrls>,
    state: &CategorizedMediaState<()>,
) -> anyhow::Result<Vec<String>> {
    let mut handles = Vec::new();
    for item in state.flatten() {
        handles.push(upload.preview(item)?);
    }
    Ok(handles)
}

#[test]
fn test_preview_is_stable_across_renders() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let state = upload.empty_state();
    let state = upload
        .select_files(&state, &bathroom(), vec![image("a.png", 1)])?
        .state;

    let item = &state.items(&bathroom()).unwrap()[0];
    let first = upload.preview(item)?;
    let second = upload.preview(item)?;
    assert_eq!(first, second);
    assert_eq!(urls.created.get(), 1);
    assert_eq!(upload.live_previews(), 1);
    Ok(())
}

#[test]
fn test_persisted_urls_are_returned_unchanged() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let item = MediaItem::Persisted("https://cdn.test/a.png".to_string());
    assert_eq!(upload.preview(&item)?, "https://cdn.test/a.png");
    assert_eq!(urls.created.get(), 0);
    assert_eq!(upload.live_previews(), 0);
    Ok(())
}

#[test]
fn test_removing_an_item_releases_its_preview() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let state = upload.empty_state();
    let state = upload
        .select_files(
            &state,
            &bathroom(),
            vec![image("a.png", 1), image("b.png", 2), image("c.png", 3)],
        )?
        .state;
    let handles = preview_all(&mut upload, &state)?;
    assert_eq!(urls.live(), 3);

    let state = upload.remove_item(&state, &bathroom(), 1)?;
    assert_eq!(urls.live(), 2);
    assert!(!urls.live.borrow().contains(&handles[1]));
    let remaining: Vec<&str> = state
        .items(&bathroom())
        .unwrap()
        .iter()
        .map(|item| item.display_name())
        .collect();
    assert_eq!(remaining, ["a.png", "c.png"]);

    // surviving items keep their handles
    assert_eq!(preview_all(&mut upload, &state)?, [handles[0].clone(), handles[2].clone()]);
    assert_eq!(urls.created.get(), 3);
    Ok(())
}

#[test]
fn test_live_previews_track_local_items() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let mut state = upload.empty_state();

    let steps: Vec<(CategoryId, Vec<LocalFile<()>>)> = vec![
        (bathroom(), vec![image("a.png", 1), image("b.png", 2)]),
        (kitchen(), vec![image("a.png", 1)]),
        (bathroom(), vec![image("a.png", 1), image("c.png", 3)]),
        (
            kitchen(),
            (0..8).map(|i| image(&format!("k{i}.png"), 10 + i)).collect(),
        ),
    ];
    for (category, files) in steps {
        state = upload.select_files(&state, &category, files)?.state;
        preview_all(&mut upload, &state)?;
        assert_eq!(upload.live_previews(), state.local_keys().len());
        assert_eq!(urls.live(), state.local_keys().len());
    }
    assert_eq!(state.items(&kitchen()).unwrap().len(), 5);

    while !state.items(&kitchen()).unwrap().is_empty() {
        state = upload.remove_item(&state, &kitchen(), 0)?;
        assert_eq!(upload.live_previews(), state.local_keys().len());
    }
    assert_eq!(urls.live(), 3);
    Ok(())
}

#[test]
fn test_overflow_files_never_get_previews() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let state = upload.empty_state();
    let outcome = upload.select_files(
        &state,
        &bathroom(),
        (0..7).map(|i| image(&format!("{i}.png"), i)).collect(),
    )?;
    assert_eq!(outcome.overflow, 2);
    preview_all(&mut upload, &outcome.state)?;
    assert_eq!(urls.created.get(), 5);
    assert_eq!(urls.live(), 5);
    Ok(())
}

#[test]
fn test_replacing_state_releases_dropped_items() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let state = upload.empty_state();
    let state = upload
        .select_files(&state, &bathroom(), vec![image("a.png", 1), image("b.png", 2)])?
        .state;
    preview_all(&mut upload, &state)?;
    assert_eq!(urls.live(), 2);

    // the host loads a saved draft over the top of the current photos
    let draft = GalleryPayload::from_categorized(
        vec![CategoryPhotos {
            category: bathroom(),
            urls: vec!["https://cdn.test/saved.png".into()],
        }],
        None,
    );
    let loaded = CategorizedMediaState::from_payload(upload.config(), &draft);
    assert_eq!(upload.replace_state(&loaded), 2);
    assert_eq!(urls.live(), 0);
    assert_eq!(upload.live_previews(), 0);
    Ok(())
}

#[test]
fn test_uploaded_files_release_their_previews() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let state = upload.empty_state();
    let state = upload
        .select_files(&state, &bathroom(), vec![image("a.png", 1), image("b.png", 2)])?
        .state;
    preview_all(&mut upload, &state)?;

    let key = state.items(&bathroom()).unwrap()[0].local_key().unwrap();
    let state = state.with_uploaded(key, "https://cdn.test/a.png");
    upload.replace_state(&state);
    assert_eq!(urls.live(), 1);
    assert_eq!(upload.live_previews(), 1);
    assert_eq!(preview_all(&mut upload, &state)?[0], "https://cdn.test/a.png");
    Ok(())
}

#[test]
fn test_teardown_releases_everything() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let state = upload.empty_state();
    let state = upload
        .select_files(&state, &bathroom(), vec![image("a.png", 1), image("b.png", 2)])?
        .state;
    let state = upload
        .select_files(&state, &kitchen(), vec![image("c.png", 3)])?
        .state;
    preview_all(&mut upload, &state)?;
    assert_eq!(urls.live(), 3);

    // still reachable, released anyway
    upload.teardown();
    assert_eq!(upload.live_previews(), 0);
    assert_eq!(urls.live(), 0);
    Ok(())
}

#[test]
fn test_dropping_the_widget_releases_everything() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let state = upload.empty_state();
    let state = upload
        .select_files(&state, &bathroom(), vec![image("a.png", 1), image("b.png", 2)])?
        .state;
    preview_all(&mut upload, &state)?;
    assert_eq!(urls.live(), 2);

    drop(upload);
    assert_eq!(urls.live(), 0);
    Ok(())
}

#[test]
fn test_duplicate_notices_come_back_one_per_file() -> anyhow::Result<()> {
    let (mut upload, _urls) = uploader();
    let state = upload.empty_state();
    let state = upload
        .select_files(&state, &bathroom(), vec![image("a.png", 1000)])?
        .state;
    let outcome = upload.select_files(
        &state,
        &bathroom(),
        vec![image("a.png", 1000), image("a.png", 1000), image("b.png", 5)],
    )?;
    assert_eq!(outcome.duplicates, ["a.png", "a.png"]);
    assert_eq!(outcome.added, 1);
    Ok(())
}

#[test]
fn test_files_outside_the_gallery_get_no_preview() -> anyhow::Result<()> {
    let (mut upload, urls) = uploader();
    let stray = MediaItem::Local(image("x.png", 1));
    assert!(upload.preview(&stray).is_err());
    assert_eq!(upload.live_previews(), 0);
    assert_eq!(urls.created.get(), 0);

    // once it is selected into a category the same file previews normally
    let state = upload.empty_state();
    let state = upload
        .select_files(&state, &bathroom(), vec![image("a.png", 1)])?
        .state;
    preview_all(&mut upload, &state)?;
    assert!(upload.preview(&stray).is_err());
    assert!(upload.live_previews() <= state.local_keys().len());

    // a removed file can't be previewed back into the cache
    let removed = state.items(&bathroom()).unwrap()[0].clone();
    let state = upload.remove_item(&state, &bathroom(), 0)?;
    assert!(upload.preview(&removed).is_err());
    assert_eq!(upload.live_previews(), state.local_keys().len());
    assert_eq!(urls.live(), 0);
    Ok(())
}

#[test]
fn test_widget_tracks_the_latest_state() -> anyhow::Result<()> {
    let (mut upload, _urls) = uploader();
    let stale = upload.empty_state();
    upload.select_files(&stale, &bathroom(), vec![image("a.png", 1)])?;

    // a second batch built on the widget's own state keeps the first one
    let latest = upload.state().clone();
    let state = upload
        .select_files(&latest, &bathroom(), vec![image("b.png", 2)])?
        .state;
    let names: Vec<&str> = state
        .items(&bathroom())
        .unwrap()
        .iter()
        .map(|item| item.display_name())
        .collect();
    assert_eq!(names, ["a.png", "b.png"]);
    assert_eq!(upload.state(), &state);
    Ok(())
}
