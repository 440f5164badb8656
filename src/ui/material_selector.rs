use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::physics::Photocell;
use crate::render::DisplayList;

use super::{Layout, Menu, PointerPhase, Response};

const WIDTH: i32 = 600;
const HEIGHT: i32 = 300;
const GRID: Layout = Layout::Grid { cell: 44, button: 40 };

/// Grid of cathode materials; picking one retargets the photocell.
pub struct MaterialSelector {
    grid: Menu<String>,
    press: Option<Point>,
}

impl MaterialSelector {
    /// Centres the grid in `parent` and starts on the photocell's current cathode.
    pub fn new(parent: Rect, photocell: &Photocell) -> Result<Self> {
        let rect = Rect::from_center(parent.local().center(), WIDTH, HEIGHT);
        let entries = photocell
            .materials()
            .codes()
            .map(|code| (code.to_string(), code.to_string()))
            .collect();
        let mut grid = Menu::new(rect, GRID, entries)?;
        grid.select_key(&photocell.cathode().to_string());
        Ok(Self { grid, press: None })
    }

    /// Handles a pointer event in canvas space.
    ///
    /// The material is chosen by where the press started, on release.
    pub fn handle_input(
        &mut self,
        pos: Point,
        phase: PointerPhase,
        photocell: &mut Photocell,
    ) -> Result<Response> {
        let local = self.grid.rect().to_local(pos);
        match phase {
            PointerPhase::Start => {
                self.press = Some(local);
                Ok(Response::Ignored)
            }
            PointerPhase::Pos => Ok(Response::Ignored),
            PointerPhase::Stop => {
                if let Some(press) = self.press.take() {
                    if let Some(index) = self.grid.click(press) {
                        photocell.set_material(&self.grid.buttons()[index].key)?;
                    }
                }
                Ok(Response::Redraw)
            }
        }
    }

    pub fn active(&self) -> &str {
        self.grid.active()
    }

    pub fn grid(&self) -> &Menu<String> {
        &self.grid
    }

    pub fn rect(&self) -> Rect {
        self.grid.rect()
    }

    pub fn draw(&self, out: &mut DisplayList) {
        self.grid.draw(out);
    }
}
