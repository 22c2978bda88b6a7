/// Images bundled with the page. Trunk copies `assets/` next to the wasm
/// output, so every path is relative to the site root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    Logo,
    HeroProduct,
    OneKg,
    FiveKg,
    TenKg,
    Earthworm,
}

impl Asset {
    pub fn path(self) -> &'static str {
        match self {
            Asset::Logo => "/assets/logo.png",
            Asset::HeroProduct => "/assets/product.png",
            Asset::OneKg => "/assets/1kg.jpg",
            Asset::FiveKg => "/assets/5kg.jpg",
            Asset::TenKg => "/assets/10kg.jpg",
            Asset::Earthworm => "/assets/earthworm.jpg",
        }
    }
}
