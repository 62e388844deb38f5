// filepath: src/config.rs
//! Scene configuration
//!
//! A scene describes a frame as a list of buttons and labels. It is read from
//! a TOML file and rendered with `crate::scene::render_scene`.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::color::ColorRgba;
use crate::elements::{IconButtonOptions, TextStyle};
use crate::layout::Rect;

/// One element of a scene, carrying exactly the arguments of its primitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    TextButton {
        rect: Rect,
        text: String,
        font: TextStyle,
        bg_color: ColorRgba,
    },
    IconButton {
        rect: Rect,
        icon_path: PathBuf,
        bg_color: ColorRgba,
        #[serde(default)]
        options: IconButtonOptions,
    },
    TextLabel {
        x: i32,
        y: i32,
        text: String,
        font: TextStyle,
    },
}

/// A frame to render: canvas size, clear color and elements in draw order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,

    #[serde(default = "default_clear_color")]
    pub clear_color: ColorRgba,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub elements: Vec<Element>,
}

fn default_clear_color() -> ColorRgba {
    ColorRgba::rgb(30, 30, 30)
}

fn default_output() -> PathBuf {
    PathBuf::from("frame.png")
}

impl Default for Scene {
    fn default() -> Self {
        let font = TextStyle::new("assets/fonts/Roboto-Bold.ttf", 14, ColorRgba::WHITE);
        Self {
            width: 320,
            height: 120,
            clear_color: default_clear_color(),
            output: default_output(),
            elements: vec![
                Element::TextButton {
                    rect: Rect::new(0, 0, 100, 32),
                    text: "TESTE".to_string(),
                    font: font.clone(),
                    bg_color: ColorRgba::BLACK,
                },
                Element::IconButton {
                    rect: Rect::new(110, 0, 32, 32),
                    icon_path: PathBuf::from("assets/icons/close.png"),
                    bg_color: ColorRgba::BLACK,
                    options: IconButtonOptions::default(),
                },
                Element::TextLabel {
                    x: 0,
                    y: 48,
                    text: "Text here!".to_string(),
                    font,
                },
            ],
        }
    }
}

impl Scene {
    /// Get the path to the default scene file
    pub fn get_config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("element-render")
        } else {
            PathBuf::from(".config/element-render")
        };

        config_dir.join("scene.toml")
    }

    /// Load the default scene file, creating it with default values if missing
    pub fn load_from_file() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_or_create(Self::get_config_path())
    }

    /// Load a scene from `path`; a missing file is an error
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read scene {}: {}", path.display(), e))?;
        let scene: Self = toml::from_str(&content)?;
        Ok(scene)
    }

    fn load_or_create(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => {
                let scene: Self = toml::from_str(&content)?;
                Ok(scene)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No scene at {:?}, writing the default one", path);
                let default_scene = Self::default();
                default_scene.save_to(path)?;
                Ok(default_scene)
            }
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Save the scene to the default scene file
    pub fn save_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(Self::get_config_path())
    }

    /// Save the scene to `path`
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();

        // Create the directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}
