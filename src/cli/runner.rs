use tracing::info;

use rastermill::core::params::{TransformOp, TransformParams};
use rastermill::{format_for_path, process_directory_to_path, transform_file_to_path};

use super::args::{CliArgs, OpCommand};
use super::errors::AppError;

fn params_from_args(args: &CliArgs) -> Result<TransformParams, AppError> {
    if let Some(preset) = &args.params {
        return Ok(TransformParams::from_json_file(preset)?);
    }

    let ops = match args.op.as_ref().ok_or(AppError::MissingArgument {
        arg: "subcommand or --params".to_string(),
    })? {
        OpCommand::Quantize { levels } => levels
            .iter()
            .map(|&levels| TransformOp::Quantize { levels })
            .collect(),
        OpCommand::Filter { kernel, border } => kernel
            .iter()
            .map(|&kernel| TransformOp::BoxFilter {
                kernel,
                border: *border,
            })
            .collect(),
        OpCommand::Rotate {
            angle,
            fill,
            interpolation,
        } => angle
            .iter()
            .map(|&angle| TransformOp::Rotate {
                angle,
                fill: *fill,
                interpolation: *interpolation,
            })
            .collect(),
        OpCommand::Pool { kernel } => kernel
            .iter()
            .map(|&kernel| TransformOp::BlockAverage { kernel })
            .collect(),
    };

    let mut params = TransformParams::with_ops(ops, args.format);
    params.grayscale = args.gray;
    params.size = args.size;
    params.panel = args.panel;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let mut params = params_from_args(&args)?;

    if args.input_dir.is_some() {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(&input_dir, &output_dir, &params, !args.fail_fast)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        // A recognized output extension wins over the --format flag.
        if let Some(format) = format_for_path(&output) {
            params.format = format;
        }
        transform_file_to_path(&input, &output, &params)?;
        info!("Successfully processed: {:?} -> {:?}", input, output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use rastermill::core::params::TransformOp;
    use rastermill::types::BorderPolicy;

    use super::params_from_args;
    use crate::cli::args::CliArgs;

    #[test]
    fn comma_separated_kernels_become_one_op_each() {
        let args = CliArgs::parse_from([
            "rastermill",
            "--input",
            "in.png",
            "--output",
            "out.png",
            "filter",
            "--kernel",
            "3,10,20",
        ]);
        let params = params_from_args(&args).unwrap();
        assert_eq!(
            params.ops,
            vec![
                TransformOp::BoxFilter {
                    kernel: 3,
                    border: BorderPolicy::Reflect
                },
                TransformOp::BoxFilter {
                    kernel: 10,
                    border: BorderPolicy::Reflect
                },
                TransformOp::BoxFilter {
                    kernel: 20,
                    border: BorderPolicy::Reflect
                },
            ]
        );
    }

    #[test]
    fn single_angle_maps_to_a_single_op() {
        let args = CliArgs::parse_from([
            "rastermill",
            "--input",
            "in.png",
            "--output",
            "out.png",
            "rotate",
            "--angle",
            "-30",
        ]);
        let params = params_from_args(&args).unwrap();
        assert_eq!(params.ops.len(), 1);
        assert!(matches!(
            params.ops[0],
            TransformOp::Rotate { angle, .. } if angle == -30.0
        ));
    }
}
