//! Browser object urls as the preview handles for picked photos.

use gallery::{LocalFile, PreviewError, PreviewSource};
use web_sys::{File, Url};

/// Creates `blob:` urls for local files and revokes them on release.
#[derive(Debug, Default)]
pub struct ObjectUrls;

impl PreviewSource<File> for ObjectUrls {
    fn create(&mut self, file: &LocalFile<File>) -> Result<String, PreviewError> {
        Url::create_object_url_with_blob(&file.file).map_err(|e| PreviewError {
            file_name: file.name.clone(),
            reason: format!("{e:?}"),
        })
    }

    fn release(&mut self, handle: &str) {
        if let Err(e) = Url::revoke_object_url(handle) {
            tracing::warn!(handle, "failed to revoke object url: {e:?}");
        }
    }
}
