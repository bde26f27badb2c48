//! Build a small sparse matrix with `set` and write it to an .sptx file

use sptx::DokMatrix;

fn main() -> sptx::Result<()> {
    let filename = "example_matrix.sptx";

    let mut matrix = DokMatrix::<i64>::new(8, 8);
    for i in 0..8 {
        matrix.set(i, i, 2);
        if i + 1 < 8 {
            matrix.set(i, i + 1, -1);
            matrix.set(i + 1, i, -1);
        }
    }

    println!("Writing {} to '{filename}'...", matrix.summary());
    matrix.save(filename)?;

    // Read it back and confirm the entry set survived
    let reloaded = DokMatrix::<i64>::load(filename)?;
    assert_eq!(reloaded, matrix);
    println!("Reloaded matrix matches. Dense view:");
    print!("{}", reloaded.render());

    Ok(())
}
