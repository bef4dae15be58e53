use crate::data::data_item::DataItem;

/// Column names, in the order `logic_dataset` lays out its targets.
pub const LOGIC_FUNCTION_NAMES: [&str; 6] = ["XOR", "XNOR", "OR", "AND", "NOR", "NAND"];

pub fn xor(i: u32, j: u32) -> u32 {
    i ^ j
}

pub fn xnor(i: u32, j: u32) -> u32 {
    1 - xor(i, j)
}

pub fn or(i: u32, j: u32) -> u32 {
    i | j
}

pub fn and(i: u32, j: u32) -> u32 {
    i & j
}

pub fn nor(i: u32, j: u32) -> u32 {
    1 - or(i, j)
}

pub fn nand(i: u32, j: u32) -> u32 {
    1 - and(i, j)
}

/// Truth table for all six functions over the inputs
/// (0,0), (0,1), (1,0), (1,1), in that order.
pub fn logic_dataset() -> Vec<DataItem> {
    let mut items = Vec::with_capacity(4);
    for i in 0..=1 {
        for j in 0..=1 {
            let targets = [xor(i, j), xnor(i, j), or(i, j), and(i, j), nor(i, j), nand(i, j)];
            items.push(DataItem::new(
                vec![i as f64, j as f64],
                targets.iter().map(|&t| t as f64).collect(),
            ));
        }
    }
    items
}
