//! gui/update/photos.rs
//! Loads the gallery photos off-thread at boot. Decoding stays on the
//! GUI side (iced's image widget handles it); this just reads bytes so
//! a slow disk never blocks the first frame.

use std::fs;
use std::path::Path;

use iced::Task;
use iced::futures::channel::oneshot;
use iced::widget::image;
use tracing::warn;

use super::super::state::{Keepsake, Message};
use crate::content;

pub(crate) fn load_photos() -> Task<Message> {
    let paths: Vec<&'static str> = content::PHOTOS.iter().map(|photo| photo.path).collect();

    Task::perform(
        async move {
            let (tx, rx) = oneshot::channel();

            std::thread::spawn(move || {
                let loaded: Vec<Result<image::Handle, String>> = paths
                    .iter()
                    .map(|path| read_photo(Path::new(path)))
                    .collect();
                let _ = tx.send(loaded);
            });

            // A dead worker produces an empty batch; photos_loaded
            // treats that as every photo failed.
            rx.await.unwrap_or_default()
        },
        Message::PhotosLoaded,
    )
}

fn read_photo(path: &Path) -> Result<image::Handle, String> {
    let bytes = fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(image::Handle::from_bytes(bytes))
}

pub(crate) fn photos_loaded(
    state: &mut Keepsake,
    results: Vec<Result<image::Handle, String>>,
) -> Task<Message> {
    if results.len() != state.photos.len() {
        warn!(
            "photo loader returned {} of {} photos",
            results.len(),
            state.photos.len()
        );
    }

    for (slot, result) in state.photos.iter_mut().zip(results) {
        match result {
            Ok(handle) => *slot = Some(handle),
            Err(err) => warn!("gallery photo unavailable: {err}"),
        }
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_photos_keep_their_placeholders() {
        let mut state = Keepsake::default();
        assert!(state.photos.iter().all(Option::is_none));

        let results = vec![
            Ok(image::Handle::from_bytes(vec![0u8; 4])),
            Err("assets/photos/missing.jpg: no such file".to_string()),
            Ok(image::Handle::from_bytes(vec![0u8; 4])),
        ];
        let _ = photos_loaded(&mut state, results);

        assert!(state.photos[0].is_some());
        assert!(state.photos[1].is_none());
        assert!(state.photos[2].is_some());
    }

    #[test]
    fn a_dead_loader_changes_nothing() {
        let mut state = Keepsake::default();

        let _ = photos_loaded(&mut state, Vec::new());

        assert!(state.photos.iter().all(Option::is_none));
    }
}
