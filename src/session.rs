//! Prediction session state.
//!
//! A [`Session`] tracks the three pieces of state behind a prediction
//! workflow: the currently selected file, the most recent successful
//! prediction, and whether a request is in flight. Mutating operations take
//! `&mut self`, so a caller cannot start a second upload while one is
//! already running.

use std::path::Path;

use tokio::sync::watch;

use crate::client::PredictClient;
use crate::types::{Prediction, SelectedFile};
use crate::{IdunnError, Result};

/// State for one prediction workflow against a [`PredictClient`].
pub struct Session {
    client: PredictClient,
    file: Option<SelectedFile>,
    result: Option<Prediction>,
    loading: watch::Sender<bool>,
}

impl Session {
    /// Start a session against the given client. No file is selected and no
    /// result is present.
    pub fn new(client: PredictClient) -> Self {
        Self {
            client,
            file: None,
            result: None,
            loading: watch::Sender::new(false),
        }
    }

    /// Select the file to upload, replacing any previous selection.
    ///
    /// A new selection clears the previous result: the displayed prediction
    /// always describes the current selection, never a stale one.
    pub fn select_file(&mut self, path: impl AsRef<Path>) -> &SelectedFile {
        self.result = None;
        self.file.insert(SelectedFile::new(path.as_ref()))
    }

    /// Upload the selected file and store the prediction.
    ///
    /// Fails with [`IdunnError::NoFileSelected`] before any request is made
    /// when nothing is selected. On success the stored result is replaced;
    /// on failure the previous result is left as it was. The loading flag is
    /// raised strictly for the duration of the request, and clears even if
    /// the returned future is dropped mid-flight.
    pub async fn submit(&mut self) -> Result<&Prediction> {
        let file = self.file.as_ref().ok_or(IdunnError::NoFileSelected)?;

        let _guard = LoadingGuard::raise(&self.loading);
        let prediction = self.client.predict(file).await?;
        Ok(self.result.insert(prediction))
    }

    /// The currently selected file, if any.
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// The most recent successful prediction, if any.
    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    /// Whether an upload is currently in flight.
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Watch loading transitions. Useful for observing a request from
    /// another task while [`Session::submit`] holds the session.
    pub fn loading_changes(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// The client this session submits through.
    pub fn client(&self) -> &PredictClient {
        &self.client
    }
}

/// Raises the loading flag on construction and clears it on drop, so the
/// flag cannot stay stuck on a failed or cancelled request.
struct LoadingGuard<'a>(&'a watch::Sender<bool>);

impl<'a> LoadingGuard<'a> {
    fn raise(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}
