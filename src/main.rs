fn main() {
    let result = wav2lip_launcher::run();
    if let Err(error) = &result {
        eprintln!("error: {error}");
    }
    std::process::exit(wav2lip_launcher::exit_code(&result));
}
