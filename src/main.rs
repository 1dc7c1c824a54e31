use idun_quiz::QuizApp;
use idun_quiz::data::load_config;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let quiz = load_config()?;
    let title = quiz.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_title(&title),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(quiz)))),
    )?;
    Ok(())
}

// En la web el arranque lo hace `WebRunner` sobre el canvas de index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let quiz = match load_config() {
            Ok(quiz) => quiz,
            Err(e) => {
                log::error!("Configuración inválida: {e}");
                return;
            }
        };

        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("No se encontró el canvas 'the_canvas_id'");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(QuizApp::new(quiz)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar la app web: {e:?}");
        }
    });
}
