//! SDK entry points and builder for composing the visualizer app.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::camera::orbit_camera_plugin;
use crate::config;
use crate::data::{init_feed_channel, init_fixture_channel, FeedConfig};
use crate::picking::pick_plugin;
use crate::render::{GlobeRenderer, RendererResource, SpheresAndLinesRenderer};
use crate::scene::{
    draw_connections, ingest_latency, setup_scene, spawn_markers, spawn_region_rings,
    ServerCatalog,
};
use crate::ui::{hud_plugin, inspector_plugin, tooltip_plugin, HudState};

/// Builder for constructing the globe app with customizable plugins.
pub struct GlobeBuilder {
    feed_config: Option<FeedConfig>,
    fixture: Option<PathBuf>,
    renderer: Option<Box<dyn GlobeRenderer>>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit_camera: bool,
    enable_region_rings: bool,
    enable_hud: bool,
    enable_tooltip: bool,
    enable_inspector: bool,
}

impl Default for GlobeBuilder {
    fn default() -> Self {
        Self {
            feed_config: None,
            fixture: None,
            renderer: None,
            window_title: "Meridian".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.02, 0.03, 0.06),
            enable_orbit_camera: true,
            enable_region_rings: true,
            enable_hud: true,
            enable_tooltip: true,
            enable_inspector: true,
        }
    }
}

impl GlobeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit feed configuration.
    pub fn feed_config(mut self, config: FeedConfig) -> Self {
        self.feed_config = Some(config);
        self
    }

    /// Load feed settings (and an optional fixture path) from environment
    /// variables.
    pub fn feed_from_env(mut self) -> Self {
        self.feed_config = Some(config::feed_config());
        self.fixture = config::fixture_path();
        self
    }

    /// Replay snapshots from a JSON fixture file instead of the live feed.
    pub fn fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture = Some(path.into());
        self
    }

    /// Provide a custom renderer implementation.
    pub fn renderer(mut self, renderer: impl GlobeRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_region_rings(mut self) -> Self {
        self.enable_region_rings = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    pub fn disable_tooltip(mut self) -> Self {
        self.enable_tooltip = false;
        self
    }

    pub fn disable_inspector(mut self) -> Self {
        self.enable_inspector = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let feed_config = self.feed_config.unwrap_or_default();
        let catalog = ServerCatalog {
            servers: feed_config.servers.clone(),
            regions: crate::data::catalog::cloud_regions(),
        };
        let channel = match self.fixture {
            Some(ref path) => init_fixture_channel(path),
            None => init_feed_channel(feed_config),
        };
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(SpheresAndLinesRenderer::default()));

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        // Egui hosts every overlay and the picker's pointer-over-UI guard.
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(channel)
        .insert_resource(catalog)
        .init_resource::<HudState>()
        .add_systems(Startup, setup_scene)
        .add_systems(PostStartup, spawn_markers)
        .add_systems(Update, (ingest_latency, draw_connections).chain());

        if self.enable_region_rings {
            app.add_systems(PostStartup, spawn_region_rings);
        }

        renderer.setup(&mut app);
        app.insert_resource(RendererResource(renderer));

        pick_plugin(&mut app);

        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if self.enable_tooltip {
            app.add_plugins(tooltip_plugin);
        }
        if self.enable_inspector {
            app.add_plugins(inspector_plugin);
        }

        app
    }
}
