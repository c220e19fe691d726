use panepack::{Item, Packer};

fn main() {
    env_logger::init();

    let inputs: Vec<_> = (0..5).map(|_| Item::new((60, 40))).collect();

    let packer = Packer::new((100, 100));
    let result = packer.pack(&inputs);

    println!("Pack result: {:#?}", result);
}
