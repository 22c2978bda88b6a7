use crate::assets::Asset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomState {
    Closed,
    Zoomed(Asset),
}

/// Full-screen product image overlay. Keeps the last zoomed image around
/// after closing so the exit fade still has something to paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomOverlay {
    state: ZoomState,
    last: Option<Asset>,
}

impl Default for ZoomOverlay {
    fn default() -> Self {
        Self {
            state: ZoomState::Closed,
            last: None,
        }
    }
}

impl ZoomOverlay {
    pub fn state(&self) -> ZoomState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ZoomState::Zoomed(_))
    }

    /// A thumbnail was activated. The most recent activation always wins,
    /// whether or not the overlay was already open.
    pub fn activate(self, image: Asset) -> Self {
        Self {
            state: ZoomState::Zoomed(image),
            last: Some(image),
        }
    }

    /// The overlay background was clicked.
    pub fn dismiss(self) -> Self {
        Self {
            state: ZoomState::Closed,
            ..self
        }
    }

    /// Image to render inside the overlay, including while it fades out.
    pub fn painted(&self) -> Option<Asset> {
        match self.state {
            ZoomState::Zoomed(image) => Some(image),
            ZoomState::Closed => self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Asset; 4] = [Asset::OneKg, Asset::FiveKg, Asset::TenKg, Asset::Earthworm];

    #[test]
    fn starts_closed_with_nothing_painted() {
        let zoom = ZoomOverlay::default();
        assert_eq!(zoom.state(), ZoomState::Closed);
        assert!(!zoom.is_open());
        assert_eq!(zoom.painted(), None);
    }

    #[test]
    fn thumbnail_zooms_that_exact_image() {
        for image in ALL {
            let zoom = ZoomOverlay::default().activate(image);
            assert_eq!(zoom.state(), ZoomState::Zoomed(image));
            assert_eq!(zoom.painted(), Some(image));
        }
    }

    #[test]
    fn background_click_always_closes() {
        for image in ALL {
            let zoom = ZoomOverlay::default().activate(image).dismiss();
            assert_eq!(zoom.state(), ZoomState::Closed);
            assert_eq!(zoom.painted(), Some(image));
        }
        assert_eq!(ZoomOverlay::default().dismiss().state(), ZoomState::Closed);
    }

    #[test]
    fn switching_thumbnails_while_zoomed() {
        let zoom = ZoomOverlay::default().activate(Asset::FiveKg);
        assert_eq!(zoom.state(), ZoomState::Zoomed(Asset::FiveKg));

        let zoom = zoom.activate(Asset::TenKg);
        assert_eq!(zoom.state(), ZoomState::Zoomed(Asset::TenKg));

        let zoom = zoom.dismiss();
        assert!(!zoom.is_open());
    }
}
