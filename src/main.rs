use pmd_reader::{ModelDocument, ReaderOptions};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-pmd-file> [--encoding <LABEL>]", args[0]);
        std::process::exit(1);
    }

    let pmd_path = &args[1];
    let mut options = ReaderOptions::default();
    // Parse --encoding argument
    if let Some(encoding_idx) = args.iter().position(|arg| arg == "--encoding") {
        match args.get(encoding_idx + 1) {
            Some(label) => options = options.with_encoding_label(label),
            None => {
                eprintln!("ERROR: --encoding flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    println!("Reading PMD file: {}", pmd_path);
    println!("Text encoding: {}", options.encoding.name());
    println!("{}", "=".repeat(60));

    match pmd_reader::open_path(pmd_path, &options) {
        Ok(model) => {
            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Reading completed.");
            println!("{}", "=".repeat(60));
            print_summary(&model);

            println!("\nMaterials (first 10):");
            for (i, faces) in model.material_faces().take(10).enumerate() {
                match faces {
                    Ok((material, indices)) => println!(
                        "  {}. {} indices, texture={:?}, toon={}",
                        i + 1,
                        indices.len(),
                        material.texture,
                        material.toon
                    ),
                    Err(e) => println!("  {}. {}", i + 1, e),
                }
            }
            if model.materials.len() > 10 {
                println!("  ... and {} more", model.materials.len() - 10);
            }

            match model.check_face_counts() {
                Ok(()) => println!("\nFace counts: consistent"),
                Err(e) => println!("\nFace counts: {}", e),
            }
        }
        Err(failure) => {
            eprintln!("\nERROR: Failed to read PMD file");
            eprintln!("  {}: {}", failure, failure.source);
            let partial = failure.into_partial();
            eprintln!("  Decoded sections: {:?}", partial.completed_sections());
            print_summary(&partial);
            std::process::exit(1);
        }
    }
}

fn print_summary(model: &ModelDocument) {
    if let Some(header) = &model.header {
        println!("\nModel Information:");
        println!("  Name: {}", header.name);
        println!("  Version: {}", header.version);
        println!("  Comment: {}", header.comment.replace('\n', "\n           "));
    }

    println!("\nStatistics:");
    println!("  Vertices: {}", model.vertex_count());
    println!("  Indices: {}", model.index_count());
    println!("  Materials: {}", model.materials.len());
    println!("  Bones: {}", model.bones.len());
    println!("  IK chains: {}", model.ik_chains.len());
    println!("  Skins: {}", model.skins.len());
    println!("  Skin display entries: {}", model.skin_display.len());
    println!("  Bone names: {}", model.bone_names.len());
}
