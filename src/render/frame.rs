use crate::core::Viewport;
use crate::error::{RouteCanvasError, RouteCanvasResult};
use crate::render::{CirclePrimitive, Color, PolylinePrimitive, TextPrimitive};

/// One draw operation, executed in frame order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
    Polyline(PolylinePrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> RouteCanvasResult<()> {
        match self {
            Self::Clear(color) => color.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Text(text) => text.validate(),
            Self::Polyline(polyline) => polyline.validate(),
        }
    }
}

/// Backend-agnostic, ordered draw-operation sequence for one redraw.
///
/// Two frames compare equal exactly when they would draw the same thing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_command(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn validate(&self) -> RouteCanvasResult<()> {
        if !self.viewport.is_valid() {
            return Err(RouteCanvasError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for command in &self.commands {
            command.validate()?;
        }

        Ok(())
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    /// True when the frame draws nothing beyond clearing the surface.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.commands
            .iter()
            .all(|command| matches!(command, DrawCommand::Clear(_)))
    }
}
