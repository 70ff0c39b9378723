//! Design-image generation.

use futures::future::try_join;

use crate::domain::ai::DesignImages;
use crate::error::ApiError;
use crate::services::GenerativeApi;

/// Render the exterior/interior concept pair for a design prompt.
///
/// The two renders are independent of each other, so the calls run
/// concurrently. A render that comes back without an artifact fails the
/// pair; no partial result is returned.
pub async fn generate_design_images<G: GenerativeApi>(
    genai: &G,
    design_prompt: &str,
) -> Result<DesignImages, ApiError> {
    let exterior_prompt = format!(
        "{design_prompt}. Photorealistic exterior view of the building at golden hour, \
         Saudi architectural context, high detail."
    );
    let interior_prompt = format!(
        "{design_prompt}. Photorealistic interior view of the main living space, \
         natural daylight, high detail."
    );

    let (exterior, interior) = try_join(
        genai.generate_image(&exterior_prompt),
        genai.generate_image(&interior_prompt),
    )
    .await?;

    Ok(DesignImages { exterior, interior })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Prompt;
    use serde_json::Value;

    struct FakeRenderer {
        fail: bool,
    }

    impl GenerativeApi for FakeRenderer {
        async fn generate(&self, _prompt: &Prompt<'_>) -> Result<Value, ApiError> {
            unreachable!("design flow only renders images")
        }

        async fn generate_image(&self, prompt: &str) -> Result<String, ApiError> {
            if self.fail {
                return Err(ApiError::Upstream(
                    "image model returned no artifacts".to_string(),
                ));
            }
            Ok(format!("data:image/png;base64,{}", prompt.len()))
        }
    }

    #[tokio::test]
    async fn renders_both_views() {
        let images = generate_design_images(&FakeRenderer { fail: false }, "stone villa")
            .await
            .unwrap();

        assert!(images.exterior.starts_with("data:image/png"));
        assert!(images.interior.starts_with("data:image/png"));
        assert_ne!(images.exterior, images.interior);
    }

    #[tokio::test]
    async fn missing_artifact_fails_the_pair() {
        let result = generate_design_images(&FakeRenderer { fail: true }, "stone villa").await;
        assert!(matches!(result, Err(ApiError::Upstream(_))));
    }
}
