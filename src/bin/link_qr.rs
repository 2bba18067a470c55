// Generate a QR code image from a link.

use clap::Parser;
use wedding_invite_bot::qr::encode_link_as_image;

#[derive(Parser, Debug)]
#[command(about = "Generate a QR code from a link.")]
struct Args {
    /// The link to generate the QR code for
    link: String,
    /// Output file name; `.png` is appended when missing
    filename: String,
}

fn main() {
    let args = Args::parse();

    match encode_link_as_image(&args.link, &args.filename) {
        Ok(path) => println!("Successfully generated QR code and saved it as '{}'", path.display()),
        Err(e) => {
            eprintln!("An error occurred: {e}");
            std::process::exit(1);
        }
    }
}
