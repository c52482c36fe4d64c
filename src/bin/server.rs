use std::net::SocketAddr;

use axum::{
    Json, Router,
    routing::{get, post},
};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use lifesim::config::Params;
use lifesim::render;
use lifesim::sim::RunOutcome;

const DEFAULT_WIDTH: i32 = 96;
const DEFAULT_HEIGHT: i32 = 64;
const MAX_DIMENSION: i32 = 1024;
/// Upper bound on frames returned in one response.
const MAX_FRAMES: u64 = 512;

#[derive(Deserialize)]
struct SimulateRequest {
    seed: Option<u64>,
    width: Option<i32>,
    height: Option<i32>,
    coverage: Option<f64>,
    max_generations: Option<u64>,
}

#[derive(Serialize)]
struct SimulateResponse {
    frames: Vec<Frame>,
    generations: u64,
    stable: bool,
    width: i32,
    height: i32,
    timings: Vec<TimingEntry>,
}

#[derive(Serialize)]
struct Frame {
    generation: u64,
    population: usize,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> String {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)
        .expect("PNG encode failed");
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    format!("data:image/png;base64,{}", b64)
}

async fn simulate_handler(Json(req): Json<SimulateRequest>) -> Json<SimulateResponse> {
    let seed = req.seed.unwrap_or(42);
    let width = req.width.unwrap_or(DEFAULT_WIDTH).clamp(0, MAX_DIMENSION);
    let height = req.height.unwrap_or(DEFAULT_HEIGHT).clamp(0, MAX_DIMENSION);

    let defaults = Params::default();
    let coverage = req.coverage.unwrap_or(defaults.coverage);
    let max_generations = req.max_generations.unwrap_or(MAX_FRAMES).min(MAX_FRAMES);

    let response = tokio::task::spawn_blocking(move || {
        let params = Params {
            coverage,
            max_generations: Some(max_generations),
        };

        let mut frames: Vec<Frame> = Vec::new();
        let (report, timings) = lifesim::simulate(seed, width, height, &params, |snapshot| {
            let generation = frames.len() as u64 + 1;
            frames.push(Frame {
                generation,
                population: snapshot.population(),
                data_url: encode_png(
                    &render::render_rgba(snapshot),
                    snapshot.width(),
                    snapshot.height(),
                ),
            });
            true
        })
        .expect("dimensions are clamped to a valid range");

        let timing_entries = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();

        SimulateResponse {
            frames,
            generations: report.generations,
            stable: report.outcome == RunOutcome::Stable,
            width,
            height,
            timings: timing_entries,
        }
    })
    .await
    .unwrap();

    Json(response)
}

async fn defaults_handler() -> Json<serde_json::Value> {
    let defaults = Params::default();
    Json(serde_json::json!({
        "seed": 42,
        "width": DEFAULT_WIDTH,
        "height": DEFAULT_HEIGHT,
        "coverage": defaults.coverage,
        "max_generations": MAX_FRAMES,
    }))
}

#[tokio::main]
async fn main() {
    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/simulate", post(simulate_handler))
        .route("/api/defaults", get(defaults_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    eprintln!("lifesim server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
