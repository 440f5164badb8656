use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use photocell_sim::frame_clock::FrameClock;
use photocell_sim::render::{Color, DrawCommand, SpriteId};
use photocell_sim::{
    AppSettings, Assets, DisplayList, MaterialTable, Photocell, PhotocellView, Point, PointerPhase,
    Rect, Settings, Simulation,
};
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

struct State<'window> {
    window: Arc<winit::window::Window>,
    surface: wgpu::Surface<'window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    sprites: HashMap<SpriteId, egui::TextureHandle>,
    simulation: Simulation,
    settings: Settings,
    display_list: DisplayList,
    pointer: Point,
    tracking_pointer: bool,
    time_step: f64,
    clock: FrameClock,
    last_title_update: Instant,
}

impl<'window> State<'window> {
    async fn new(
        window: Arc<winit::window::Window>,
        app_settings: &AppSettings,
        assets: &Assets,
        simulation: Simulation,
        settings: Settings,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or("no suitable graphics adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &*window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1);

        let sprites = assets
            .iter()
            .map(|(id, image)| {
                let size = [image.width() as usize, image.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
                let handle = egui_ctx.load_texture(id.file_name(), color_image, egui::TextureOptions::LINEAR);
                (id, handle)
            })
            .collect();

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            egui_ctx,
            egui_state,
            egui_renderer,
            sprites,
            simulation,
            settings,
            display_list: DisplayList::new(),
            pointer: Point::new(0, 0),
            tracking_pointer: false,
            time_step: app_settings.time_step(),
            clock: FrameClock::new(app_settings.fps),
            last_title_update: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn pointer_event(&mut self, phase: PointerPhase) {
        let Self { settings, simulation, pointer, .. } = self;
        if let Err(e) = settings.handle_input(*pointer, phase, &mut simulation.photocell) {
            log::error!("input rejected: {e}");
        }
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.window.scale_factor());
                self.pointer = Point::new(logical.x as i32, logical.y as i32);
                true
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        self.pointer_event(PointerPhase::Start);
                        self.tracking_pointer = true;
                    }
                    ElementState::Released => {
                        self.pointer_event(PointerPhase::Stop);
                        self.tracking_pointer = false;
                    }
                }
                true
            }
            _ => false,
        }
    }

    fn update(&mut self, now: Instant) {
        if self.tracking_pointer {
            self.pointer_event(PointerPhase::Pos);
        }
        self.simulation.step(self.time_step);
        self.clock.tick(now);

        if now.duration_since(self.last_title_update) >= Duration::from_millis(500) {
            self.window.set_title(&format!(
                "Photoelectric Effect - FPS: {:.1} - {} electrons in flight",
                self.clock.avg_framerate(),
                self.simulation.electrons.len()
            ));
            self.last_title_update = now;
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.display_list.clear();
        PhotocellView::draw(&self.simulation, &mut self.display_list);
        self.settings.draw(&mut self.display_list);

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            paint(&painter, self.display_list.commands(), &self.sprites);
        });
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);
        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };
        let egui_commands = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            self.egui_renderer.render(&mut render_pass, &paint_jobs, &screen);
        }

        self.queue
            .submit(egui_commands.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        Ok(())
    }
}

fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn egui_rect(r: &Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(r.x as f32, r.y as f32),
        egui::vec2(r.w as f32, r.h as f32),
    )
}

/// Replays the core's display list on an egui painter.
fn paint(
    painter: &egui::Painter,
    commands: &[DrawCommand],
    sprites: &HashMap<SpriteId, egui::TextureHandle>,
) {
    for command in commands {
        match command {
            DrawCommand::FillRect { rect, color } => {
                painter.rect_filled(egui_rect(rect), 0.0, color32(*color));
            }
            DrawCommand::StrokeRect { rect, color, width } => {
                painter.rect_stroke(egui_rect(rect), 0.0, egui::Stroke::new(*width, color32(*color)));
            }
            DrawCommand::Text { center, text, font, color } => {
                painter.text(
                    egui::pos2(center.x as f32, center.y as f32),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(font.size()),
                    color32(*color),
                );
            }
            DrawCommand::Quad { corners, color } => {
                let points = corners.iter().map(|[x, y]| egui::pos2(*x, *y)).collect();
                painter.add(egui::Shape::convex_polygon(points, color32(*color), egui::Stroke::NONE));
            }
            DrawCommand::Sprite { sprite, rect } => match sprites.get(sprite) {
                Some(texture) => {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(texture.id(), egui_rect(rect), uv, egui::Color32::WHITE);
                }
                None => match sprite {
                    SpriteId::Electron => {
                        let r = egui_rect(rect);
                        painter.circle_filled(r.center(), r.width() / 2.0, egui::Color32::from_rgb(40, 90, 220));
                    }
                    SpriteId::SliderCursor => {
                        painter.rect_filled(egui_rect(rect), 2.0, egui::Color32::from_rgb(60, 60, 60));
                    }
                },
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let app_settings = AppSettings::load()?;
    let assets = Assets::load(Path::new(&app_settings.asset_dir))?;
    let photocell = Photocell::new(&app_settings.photocell, MaterialTable::standard())?;
    let settings = Settings::new(&photocell)?;
    let simulation = Simulation::new(photocell);
    log::info!(
        "starting at {} fps, {:.3e} s simulated per frame",
        app_settings.fps,
        app_settings.time_step()
    );

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Photoelectric Effect")
            .with_inner_size(winit::dpi::LogicalSize::new(
                app_settings.window_width,
                app_settings.window_height,
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    let mut state = pollster::block_on(State::new(
        window.clone(),
        &app_settings,
        &assets,
        simulation,
        settings,
    ))?;

    event_loop.run(move |event, target| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == state.window.id() => {
            let _ = state.egui_state.on_window_event(&state.window, event);
            if !state.input(event) {
                match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                state: ElementState::Pressed,
                                physical_key: PhysicalKey::Code(KeyCode::Escape),
                                ..
                            },
                        ..
                    } => target.exit(),
                    WindowEvent::Resized(physical_size) => {
                        state.resize(*physical_size);
                    }
                    WindowEvent::ScaleFactorChanged { .. } => {
                        let new_size = state.window.inner_size();
                        state.resize(new_size);
                    }
                    _ => {}
                }
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            if state.clock.is_due(now) {
                state.update(now);
                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.size),
                    Err(wgpu::SurfaceError::OutOfMemory) => target.exit(),
                    Err(e) => log::warn!("frame dropped: {e:?}"),
                }
            }
            target.set_control_flow(ControlFlow::WaitUntil(state.clock.next_frame()));
        }
        _ => {}
    })?;
    Ok(())
}
