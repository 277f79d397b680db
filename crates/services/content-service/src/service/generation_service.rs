//! Generation service - AI pre-fill for editor forms.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{GeneratedContent, GenerationRequest};

use crate::clients::TextGenerator;

#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Draft field values for a form from its title.
    ///
    /// An unusable reply yields fallback content; a failed request is an error.
    async fn generate(&self, request: GenerationRequest) -> AppResult<GeneratedContent>;
}

pub struct GenerationManager {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl GenerationManager {
    /// `None` disables generation.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl GenerationService for GenerationManager {
    async fn generate(&self, request: GenerationRequest) -> AppResult<GeneratedContent> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Please enter a title first"));
        }

        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| AppError::service_unavailable("AI content generation"))?;

        let prompt = request.content_type.prompt(title);
        let reply = generator.generate_text(&prompt).await?;

        Ok(GeneratedContent::from_reply(request.content_type, &reply))
    }
}
