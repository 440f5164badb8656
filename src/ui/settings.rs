use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::physics::Photocell;
use crate::render::{Color, DisplayList};

use super::{Canvas, Layout, Menu, Panel, PointerPhase, Response};

const RECT: Rect = Rect::new(0, 450, 1000, 350);
const MENU_RECT: Rect = Rect::new(0, 0, 300, 350);
const CANVAS_RECT: Rect = Rect::new(300, 0, 700, 350);

/// Which child owns the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputTarget {
    Menu,
    Canvas,
}

/// The settings strip below the photocell: page menu on the left, active page on the right.
pub struct Settings {
    rect: Rect,
    menu: Menu<Panel>,
    canvas: Canvas,
    /// Target and settings-local position of the current press
    press: Option<(InputTarget, Point)>,
}

impl Settings {
    pub fn new(photocell: &Photocell) -> Result<Self> {
        let menu = Menu::new(
            MENU_RECT,
            Layout::Column {
                button_w: 200,
                button_h: 60,
            },
            [Panel::Light, Panel::Cathode]
                .into_iter()
                .map(|panel| (panel, panel.label().to_string()))
                .collect(),
        )?;
        let canvas = Canvas::new(CANVAS_RECT, photocell, *menu.active())?;
        Ok(Self {
            rect: RECT,
            menu,
            canvas,
            press: None,
        })
    }

    /// Routes a window-space pointer event.
    ///
    /// The child under the press owns the whole gesture: the canvas sees every
    /// phase, the menu only acts on release, at the press position.
    pub fn handle_input(
        &mut self,
        pos: Point,
        phase: PointerPhase,
        photocell: &mut Photocell,
    ) -> Result<Response> {
        let local = self.rect.to_local(pos);
        match phase {
            PointerPhase::Start => {
                if self.canvas.rect().contains(local) {
                    self.press = Some((InputTarget::Canvas, local));
                    self.canvas.handle_input(local, phase, photocell)
                } else if self.menu.rect().contains(local) {
                    self.press = Some((InputTarget::Menu, local));
                    Ok(Response::Ignored)
                } else {
                    self.press = None;
                    Ok(Response::Ignored)
                }
            }
            PointerPhase::Pos => match self.press {
                Some((InputTarget::Canvas, _)) => self.canvas.handle_input(local, phase, photocell),
                _ => Ok(Response::Ignored),
            },
            PointerPhase::Stop => match self.press.take() {
                Some((InputTarget::Menu, start)) => {
                    self.menu.click(self.menu.rect().to_local(start));
                    self.canvas.change_active(*self.menu.active());
                    Ok(Response::Redraw)
                }
                Some((InputTarget::Canvas, _)) => self.canvas.handle_input(local, phase, photocell),
                None => Ok(Response::Ignored),
            },
        }
    }

    pub fn active_panel(&self) -> Panel {
        self.canvas.active()
    }

    pub fn menu(&self) -> &Menu<Panel> {
        &self.menu
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn draw(&self, out: &mut DisplayList) {
        out.with_origin(&self.rect, |out| {
            out.fill_rect(self.rect.local(), Color::WHITE);
            self.menu.draw(out);
            self.canvas.draw(out);
        });
    }
}
