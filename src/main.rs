use anyhow::{bail, Context};
use std::env;
use std::fs;
use std::process::ExitCode;
use stockprep::{
    generate_gcode, init_logging, validate, FacingJobParams, ToolpathWorker, WorkerMessage,
    WorkerRequest, VERSION,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_logging()?;

    let args: Vec<String> = env::args().collect();
    let Some(params_path) = args.get(1) else {
        eprintln!("stockprep {VERSION}");
        eprintln!("Usage: stockprep <params.json> [output.nc]");
        return Ok(ExitCode::from(2));
    };

    let text = fs::read_to_string(params_path)
        .with_context(|| format!("failed to read parameter file {params_path}"))?;
    let params: FacingJobParams =
        serde_json::from_str(&text).context("failed to parse facing job parameters")?;

    let problems = validate(&params);
    if !problems.is_empty() {
        for problem in &problems {
            error!("{problem}");
        }
        bail!("{} parameter problem(s), generation not attempted", problems.len());
    }

    info!(
        pattern = %params.pattern.pattern_type,
        shape = %params.stock.shape,
        "generating facing toolpath"
    );

    let mut handle = ToolpathWorker::spawn(WorkerRequest::Generate {
        params: params.clone(),
    });

    let mut result = None;
    while let Some(message) = handle.recv().await {
        match message {
            WorkerMessage::Progress { progress, message } => {
                info!(progress, "{message}");
            }
            WorkerMessage::Complete {
                toolpath,
                statistics,
            } => {
                info!(
                    levels = toolpath.len(),
                    distance_mm = statistics.total_distance,
                    time_min = statistics.estimated_time,
                    "generation complete"
                );
                result = Some(toolpath);
            }
            WorkerMessage::Error { error } => bail!(error),
        }
    }
    let toolpath = result.context("worker ended without a result")?;

    let program = generate_gcode(&toolpath, &params, 1, 1);
    match args.get(2) {
        Some(output_path) => {
            fs::write(output_path, &program)
                .with_context(|| format!("failed to write {output_path}"))?;
            info!("wrote {output_path}");
        }
        None => print!("{program}"),
    }

    Ok(ExitCode::SUCCESS)
}
