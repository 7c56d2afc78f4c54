//! Plain-text rendering of both card faces.

use cc_app::BackFaceRenderer;
use cc_core::{CardLabels, CreatorProfile, EntityRecord, LoadFailure};

pub struct ConsoleRenderer {
    labels: CardLabels,
}

impl ConsoleRenderer {
    pub fn new(labels: CardLabels) -> Self {
        Self { labels }
    }

    pub fn render_front(&self, index: usize, creator: &CreatorProfile) -> String {
        let mut out = format!(
            "#{index} {} - {}, {} {}\n",
            creator.name, creator.role, creator.age, self.labels.age_suffix
        );
        if !creator.bio.is_empty() {
            out.push_str(&format!("   {}\n", creator.bio));
        }
        if !creator.github.is_empty() {
            out.push_str(&format!("   {}\n", creator.github));
        }
        out.push_str(&format!("   [{}]", self.labels.flip_hint));
        out
    }
}

impl BackFaceRenderer for ConsoleRenderer {
    type Output = String;

    fn placeholder(&self, creator: &CreatorProfile) -> String {
        format!("{}: {}", creator.name, self.labels.placeholder)
    }

    fn loading(&self, creator: &CreatorProfile) -> String {
        format!("{}: {}", creator.name, self.labels.loading)
    }

    fn loaded(&self, creator: &CreatorProfile, record: &EntityRecord) -> String {
        let mut out = format!("{}: {} (#{})", creator.name, record.name, record.id);
        if !record.types.is_empty() {
            out.push_str(&format!(" [{}]", record.types.join(", ")));
        }
        if let Some(sprite) = &record.sprite {
            out.push_str(&format!("\n   {sprite}"));
        }
        out
    }

    /// The failure kind is logged, never shown.
    fn error(&self, creator: &CreatorProfile, _failure: &LoadFailure) -> String {
        format!("{}: {}", creator.name, self.labels.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_core::{CatalogErrorKind, EntityId};

    fn creator() -> CreatorProfile {
        CreatorProfile {
            name: "Ada".to_string(),
            role: "Developer".to_string(),
            age: 24,
            bio: "Builds things".to_string(),
            avatar: String::new(),
            github: "https://github.com/ada".to_string(),
            favorite_entity_id: EntityId::new(25),
        }
    }

    #[test]
    fn test_front_face_uses_labels() {
        let renderer = ConsoleRenderer::new(CardLabels::defaults());

        let front = renderer.render_front(1, &creator());

        assert!(front.starts_with("#1 Ada - Developer, 24 years"));
        assert!(front.contains("https://github.com/ada"));
        assert!(front.ends_with("[See my favorite monster]"));
    }

    #[test]
    fn test_loaded_face_lists_types_in_order() {
        let renderer = ConsoleRenderer::new(CardLabels::defaults());
        let record = EntityRecord {
            id: EntityId::new(1).unwrap(),
            name: "Bulbasaur".to_string(),
            sprite: None,
            types: vec!["grass".to_string(), "poison".to_string()],
            height: None,
            weight: None,
        };

        assert_eq!(
            renderer.loaded(&creator(), &record),
            "Ada: Bulbasaur (#1) [grass, poison]"
        );
    }

    #[test]
    fn test_error_face_hides_failure_detail() {
        let renderer = ConsoleRenderer::new(CardLabels::defaults());
        let failure = LoadFailure {
            kind: CatalogErrorKind::Unavailable,
            detail: "request timed out after 5000 ms".to_string(),
        };

        let back = renderer.error(&creator(), &failure);

        assert_eq!(back, "Ada: Couldn't load this monster");
    }
}
