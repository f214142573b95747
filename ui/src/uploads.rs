//! Turning picked files into persisted photo urls before a save or submit.

use anyhow::{Context, anyhow};
use gallery::CategorizedMediaState;
use payloads::{APIClient, requests::UploadImage};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Upload every local file in `state`, replacing each one in place with the
/// url the backend returns. Files are uploaded one at a time in display
/// order.
///
/// On failure the state reached so far is returned with the error, so
/// photos that did upload are not sent again.
pub async fn upload_pending(
    client: &APIClient,
    state: CategorizedMediaState<File>,
) -> Result<CategorizedMediaState<File>, (CategorizedMediaState<File>, anyhow::Error)>
{
    let pending: Vec<_> = state.local_files().cloned().collect();
    let mut state = state;

    for local in pending {
        let uploaded = async {
            let image_data = read_bytes(&local.file)
                .await
                .with_context(|| format!("Could not read {}", local.name))?;
            let request = UploadImage {
                file_name: local.name.clone(),
                mime_type: local.mime_type.clone(),
                image_data,
            };
            client
                .upload_image(&request)
                .await
                .with_context(|| format!("Could not upload {}", local.name))
        }
        .await;

        match uploaded {
            Ok(image) => {
                tracing::debug!(file = %local.name, url = %image.url, "uploaded photo");
                state = state.with_uploaded(local.key, &image.url);
            }
            Err(e) => return Err((state, e)),
        }
    }

    Ok(state)
}

async fn read_bytes(file: &File) -> anyhow::Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| anyhow!("{e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
