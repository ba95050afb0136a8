use std::path::PathBuf;
use std::process;

use combine_barcodes::cli::build_cli;

fn main(){
    let matches = build_cli().get_matches();
    let work_dir = matches.get_one::<PathBuf>("dir").unwrap();

    if let Err(e) = combine_barcodes::run(work_dir){
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
