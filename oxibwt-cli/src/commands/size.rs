//! Size command implementation.

use oxibwt_transform::byte_size;

pub fn cmd_size(sequence: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Sequence: {}", sequence);
    println!("Size in bytes: {}", byte_size(sequence));
    Ok(())
}
