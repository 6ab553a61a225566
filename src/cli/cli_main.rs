use crate::Search::pubchem_api::PubChemClient;
use crate::Search::text_search::run_text_search;
use crate::Vision::image_search::run_image_search;
use crate::Vision::vision_api::VisionClient;
use crate::render::ConsoleSurface;
use crate::settings::Settings;
use std::io::{self, Write};
use std::path::Path;

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => name_search_menu(),
            "2" => image_search_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to ChemLens: chemical lookup by name or photo,\n
    powered by the PubChem database \n \x1b[0m"
    );
    println!("\x1b[33m1. Search by chemical name\x1b[0m");
    println!("\x1b[33m2. Search by image\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

fn name_search_menu() {
    print!("\x1b[36mEnter chemical name: \x1b[0m");
    io::stdout().flush().unwrap();
    let query = get_user_input();

    let settings = Settings::new();
    let resolver = PubChemClient::new(settings.clone());
    let mut surface = ConsoleSurface::new(settings);
    run_text_search(&query, &resolver, &mut surface);
}

fn image_search_menu() {
    print!("\x1b[36mEnter image file path: \x1b[0m");
    io::stdout().flush().unwrap();
    let input = get_user_input();
    let input = input.trim();
    // an empty path means the user backed out of picking a file
    let image = (!input.is_empty()).then(|| Path::new(input));

    let settings = Settings::new();
    let vision = VisionClient::new(settings.clone());
    let resolver = PubChemClient::new(settings.clone());
    let mut surface = ConsoleSurface::new(settings);
    run_image_search(image, &vision, &resolver, &mut surface);
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
