//! Counting and recording backends shared by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use element_render::{
    BackendError, ColorRgba, FontBackend, ImageBackend, RasterFont, Rect, RenderContext, Surface,
};

pub const FONT_PATH: &str = "assets/fonts/Roboto-Bold.ttf";
pub const MISSING_FONT: &str = "assets/fonts/Nope.ttf";
pub const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Real font on disk for fontdue-backed tests.
///
/// `ELEMENT_RENDER_TEST_FONT` overrides the DejaVu default; a missing font fails the test.
pub fn test_font() -> PathBuf {
    let path = std::env::var_os("ELEMENT_RENDER_TEST_FONT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SYSTEM_FONT));
    assert!(
        path.exists(),
        "test font {:?} not found, set ELEMENT_RENDER_TEST_FONT to a .ttf file",
        path
    );
    path
}

/// Live handle counters; every acquire increments, every drop decrements
#[derive(Debug, Clone, Default)]
pub struct Counters {
    pub live_fonts: Rc<Cell<i64>>,
    pub opened_fonts: Rc<Cell<i64>>,
    pub live_textures: Rc<Cell<i64>>,
    pub created_textures: Rc<Cell<i64>>,
}

impl Counters {
    pub fn assert_all_released(&self) {
        assert_eq!(self.live_fonts.get(), 0, "font leaked");
        assert_eq!(self.live_textures.get(), 0, "texture leaked");
    }
}

/// Font backend where every glyph is a solid `size/2` x `size` block
pub struct FakeFonts {
    pub counters: Counters,
    pub valid_path: PathBuf,
}

impl FakeFonts {
    pub fn new(counters: &Counters) -> Self {
        Self {
            counters: counters.clone(),
            valid_path: PathBuf::from(FONT_PATH),
        }
    }

    /// Size of the surface `text` rasterizes to at `size`
    pub fn text_size(text: &str, size: u16) -> (u32, u32) {
        let glyph_width = (u32::from(size) / 2).max(1);
        (glyph_width * text.chars().count() as u32, u32::from(size))
    }
}

pub struct FakeFont {
    size: u16,
    live: Rc<Cell<i64>>,
}

impl Drop for FakeFont {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl FontBackend for FakeFonts {
    type Font = FakeFont;

    fn open_font(&self, path: &Path, size: u16) -> Result<FakeFont, BackendError> {
        if path != self.valid_path.as_path() {
            return Err(BackendError::new(format!("{}: not found", path.display())));
        }
        if size == 0 {
            return Err(BackendError::new("bad size"));
        }
        let live = self.counters.live_fonts.clone();
        live.set(live.get() + 1);
        self.counters
            .opened_fonts
            .set(self.counters.opened_fonts.get() + 1);
        Ok(FakeFont { size, live })
    }
}

impl RasterFont for FakeFont {
    fn render_blended(&self, text: &str, color: ColorRgba) -> Result<Surface, BackendError> {
        if text.is_empty() {
            return Err(BackendError::new("text has zero width"));
        }
        let (width, height) = FakeFonts::text_size(text, self.size);
        Ok(Surface::filled(width, height, color))
    }
}

/// Image backend serving surfaces from memory
#[derive(Default)]
pub struct FakeImages {
    pub images: HashMap<PathBuf, Surface>,
}

impl FakeImages {
    pub fn with(path: &str, surface: Surface) -> Self {
        let mut images = HashMap::new();
        images.insert(PathBuf::from(path), surface);
        Self { images }
    }
}

impl ImageBackend for FakeImages {
    fn load_image(&self, path: &Path) -> Result<Surface, BackendError> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| BackendError::new(format!("{}: not found", path.display())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    SetDrawColor(ColorRgba),
    FillRect(Rect),
    Copy { texture: (u32, u32), dst: Rect },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upload {
    pub width: u32,
    pub height: u32,
    pub opaque: bool,
}

/// Rendering context that records every call instead of drawing
#[derive(Default)]
pub struct RecordingRenderer {
    pub counters: Counters,
    pub calls: Vec<DrawCall>,
    pub uploads: RefCell<Vec<Upload>>,
    pub fail_texture_creation: bool,
    pub fail_query: bool,
}

impl RecordingRenderer {
    pub fn new(counters: &Counters) -> Self {
        Self {
            counters: counters.clone(),
            ..Self::default()
        }
    }
}

pub struct FakeTexture {
    width: u32,
    height: u32,
    live: Rc<Cell<i64>>,
}

impl Drop for FakeTexture {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl RenderContext for RecordingRenderer {
    type Texture = FakeTexture;

    fn create_texture_from_surface(&mut self, surface: &Surface) -> Result<FakeTexture, BackendError> {
        if self.fail_texture_creation {
            return Err(BackendError::new("no renderer"));
        }
        self.uploads.borrow_mut().push(Upload {
            width: surface.width(),
            height: surface.height(),
            opaque: surface.alpha_mod() == 255
                && surface.pixels().chunks_exact(4).all(|px| px[3] == 255),
        });

        let live = self.counters.live_textures.clone();
        live.set(live.get() + 1);
        self.counters
            .created_textures
            .set(self.counters.created_textures.get() + 1);
        Ok(FakeTexture {
            width: surface.width(),
            height: surface.height(),
            live,
        })
    }

    fn query_texture(&self, texture: &FakeTexture) -> Result<(u32, u32), BackendError> {
        if self.fail_query {
            return Err(BackendError::new("invalid texture"));
        }
        Ok((texture.width, texture.height))
    }

    fn set_draw_color(&mut self, color: ColorRgba) {
        self.calls.push(DrawCall::SetDrawColor(color));
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), BackendError> {
        self.calls.push(DrawCall::FillRect(rect));
        Ok(())
    }

    fn copy(&mut self, texture: &FakeTexture, dst: Rect) -> Result<(), BackendError> {
        self.calls.push(DrawCall::Copy {
            texture: (texture.width, texture.height),
            dst,
        });
        Ok(())
    }
}
