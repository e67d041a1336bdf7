use p2w_generator::GenerationService;

pub fn run(prompt: &str) -> Result<(), String> {
    let world_type = GenerationService::default().classify(prompt);
    println!("{world_type}");
    Ok(())
}
