use crate::client::{Client, Query};
use crate::errors::Result;
use crate::models::{FileProgress, Id, InputMediaFile, OutputMediaFile};

impl Client {
    /// Fetch metadata of an input file.
    pub async fn get_input_details(&self, id: Id) -> Result<InputMediaFile> {
        self.get_json(&format!("inputs/{id}.json"), Query::new()).await
    }

    /// Fetch the progress of an input file.
    pub async fn get_input_progress(&self, id: Id) -> Result<FileProgress> {
        self.get_json(&format!("inputs/{id}/progress.json"), Query::new()).await
    }

    /// Fetch metadata of an output file.
    pub async fn get_output_details(&self, id: Id) -> Result<OutputMediaFile> {
        self.get_json(&format!("outputs/{id}.json"), Query::new()).await
    }

    /// Fetch the progress of an output file.
    pub async fn get_output_progress(&self, id: Id) -> Result<FileProgress> {
        self.get_json(&format!("outputs/{id}/progress.json"), Query::new()).await
    }
}
