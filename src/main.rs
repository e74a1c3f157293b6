use eframe::egui;
use egui::{vec2, ViewportBuilder};
use helpdock::ui::FloatingTrigger;
use helpdock::{InvocationMethod, PanelConfig, PanelView, SupportPanel, User};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Placeholder content surface. A production host would put a real web view
/// here; the demo just shows what the panel asked it to do.
#[derive(Clone, Default)]
struct DemoView {
    state: Rc<RefCell<DemoViewState>>,
}

#[derive(Default)]
struct DemoViewState {
    url: Option<String>,
    visible: bool,
}

impl PanelView for DemoView {
    fn load_url(&mut self, url: &str) {
        println!("[helpdock-demo] panel content -> {url}");
        self.state.borrow_mut().url = Some(url.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
}

impl DemoView {
    fn show(&self, ctx: &egui::Context) {
        let mut state = self.state.borrow_mut();
        if !state.visible {
            return;
        }
        let mut open = true;
        egui::Window::new("Support")
            .open(&mut open)
            .default_size(vec2(320.0, 420.0))
            .show(ctx, |ui| {
                match state.url.as_deref() {
                    Some(url) => ui.label(format!("Embedded panel would render {url}")),
                    None => ui.label("Panel not initialized yet"),
                };
            });
        // Closing the window is a host-side hide; the panel itself never
        // resets its visibility.
        if !open {
            state.visible = false;
        }
    }
}

struct DemoApp {
    panel: SupportPanel,
    trigger: FloatingTrigger,
    view: DemoView,
    method: InvocationMethod,
}

impl DemoApp {
    fn new(api_key: &str) -> Self {
        let mut panel = SupportPanel::new(PanelConfig::default());
        let view = DemoView::default();
        panel.attach_view(Box::new(view.clone()));

        let trigger = FloatingTrigger::new();
        panel.initialize(api_key, Box::new(trigger.handle()));
        panel.authenticate_user(User {
            email: "demo@example.com".into(),
            first_name: "Demo".into(),
            ..User::default()
        });

        Self {
            panel,
            trigger,
            view,
            method: InvocationMethod::Fab,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.panel.process_events();

        egui::TopBottomPanel::top("demo_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Invocation:");
                let mut changed = false;
                changed |= ui
                    .radio_value(&mut self.method, InvocationMethod::Fab, "Button")
                    .changed();
                changed |= ui
                    .radio_value(&mut self.method, InvocationMethod::ShakeGesture, "Shake")
                    .changed();
                changed |= ui
                    .radio_value(&mut self.method, InvocationMethod::Manual, "Manual")
                    .changed();
                if changed {
                    self.panel.set_invocation_method(self.method);
                }
                if ui.button("Open panel").clicked() {
                    self.panel.invoke();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Host application content");
            if self.method == InvocationMethod::ShakeGesture {
                ui.label("Shake the pointer side to side to open the panel.");
            }
        });

        self.trigger.show(ctx);
        self.view.show(ctx);

        // Keep pumping so worker results and shake events land promptly.
        ctx.request_repaint_after(Duration::from_millis(100));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.panel.destroy();
    }
}

fn main() {
    env_logger::init();

    let api_key = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo-app-guid".into());
    println!("[helpdock-demo] starting with app guid {api_key}");

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Helpdock Demo")
            .with_inner_size(vec2(480.0, 640.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Helpdock Demo",
        native_options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(&api_key)))),
    )
    .expect("Failed to start eframe");
}
