use crate::cmd::CheckArgs;
use crate::exit::{transport_error, CliResult, SUCCESS};

pub fn run(args: CheckArgs) -> CliResult<i32> {
    let stream = logship_transport::connect(&args.path)
        .map_err(|err| transport_error("collector unreachable", err))?;
    drop(stream);

    println!("collector reachable at {}", args.path.display());
    Ok(SUCCESS)
}
