/// Elements with a pointer-hover transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    CodePreview,
    ProjectCard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverStyle {
    pub transform: &'static str,
    pub box_shadow: Option<&'static str>,
}

impl HoverTarget {
    pub fn style(self, hovered: bool) -> HoverStyle {
        match (self, hovered) {
            (HoverTarget::CodePreview, true) => HoverStyle {
                transform: "perspective(1000px) rotateY(-5deg) rotateX(2deg) scale(1.02)",
                box_shadow: None,
            },
            (HoverTarget::CodePreview, false) => HoverStyle {
                transform: "perspective(1000px) rotateY(-15deg) rotateX(5deg) scale(1)",
                box_shadow: None,
            },
            (HoverTarget::ProjectCard, true) => HoverStyle {
                transform: "translateY(-10px) scale(1.02)",
                box_shadow: Some("0 20px 40px rgba(37, 99, 235, 0.15)"),
            },
            (HoverTarget::ProjectCard, false) => HoverStyle {
                transform: "translateY(0) scale(1)",
                box_shadow: Some("0 10px 25px rgba(37, 99, 235, 0.1)"),
            },
        }
    }
}

impl HoverStyle {
    pub fn css(&self) -> String {
        match self.box_shadow {
            Some(shadow) => format!("transform: {}; box-shadow: {};", self.transform, shadow),
            None => format!("transform: {};", self.transform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_card_lifts_on_hover() {
        assert_eq!(
            HoverTarget::ProjectCard.style(true).css(),
            "transform: translateY(-10px) scale(1.02); box-shadow: 0 20px 40px rgba(37, 99, 235, 0.15);"
        );
    }

    #[test]
    fn code_preview_has_no_shadow() {
        let style = HoverTarget::CodePreview.style(false);
        assert_eq!(style.box_shadow, None);
        assert!(style.css().starts_with("transform: perspective(1000px) rotateY(-15deg)"));
    }
}
