/// Presentational state of the navbar surface, chosen from the scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavbarSurface {
    #[default]
    Top,
    Scrolled,
}

impl NavbarSurface {
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarSurface::Scrolled
        } else {
            NavbarSurface::Top
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarSurface::Top => "rgba(255, 255, 255, 0.95)",
            NavbarSurface::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarSurface::Top => "none",
            NavbarSurface::Scrolled => "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    }

    pub fn style(self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.background(),
            self.box_shadow()
        )
    }
}
