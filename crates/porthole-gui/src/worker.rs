use std::path::Path;
use std::sync::mpsc;

use tracing::info;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the decode worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("porthole-decoder".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn decode thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Decode { path, generation } => {
                handle_decode(&path, generation, &tx, &ctx);
            }
        }
    }
}

fn handle_decode(
    path: &Path,
    generation: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match image::open(path) {
        Ok(img) => {
            let image = img.to_rgba8();
            info!(
                path = %path.display(),
                width = image.width(),
                height = image.height(),
                "decoded image"
            );
            send(
                tx,
                ctx,
                WorkerResult::Decoded {
                    generation,
                    path: path.to_path_buf(),
                    image,
                },
            );
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::DecodeFailed {
                generation,
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        ),
    }
}
