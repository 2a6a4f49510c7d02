use std::env;

use calc_engine::{BinaryOperation, Matrix};

fn print_matrix(label: &str, matrix: &Matrix) {
    println!("{} ({}x{}):", label, matrix.rows(), matrix.cols());
    for row in matrix.data() {
        println!("  {:?}", row);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let addr = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "localhost:9090".to_string());
    let mode = args.get(2).cloned().unwrap_or_else(|| "calc".to_string());

    let client = calc_client::CalcClient::connect(addr).await?;

    match mode.as_str() {
        "calc" => {
            let op: BinaryOperation = args.get(3).map_or("add", String::as_str).parse()?;
            let lhs: f64 = args.get(4).map_or("2", String::as_str).parse()?;
            let rhs: f64 = args.get(5).map_or("3", String::as_str).parse()?;

            match client.calc(op, lhs, rhs).await {
                Ok(value) => println!("{:?}({}, {}) = {}", op, lhs, rhs, value),
                Err(e) => println!("{:?}({}, {}) failed: {}", op, lhs, rhs, e),
            }
        }
        "mult" => {
            let n: usize = args.get(3).map_or("2", String::as_str).parse()?;

            let a = Matrix::sequential(n, n);
            let b = Matrix::sequential(n, n);
            print_matrix("Matrix A", &a);
            print_matrix("Matrix B", &b);

            let c = client.mult(&a, &b).await?;
            print_matrix("Result", &c);
        }
        "transpose" => {
            let rows: usize = args.get(3).map_or("2", String::as_str).parse()?;
            let cols: usize = args.get(4).map_or("3", String::as_str).parse()?;

            let a = Matrix::sequential(rows, cols);
            print_matrix("Matrix A", &a);

            let t = client.transpose(&a).await?;
            print_matrix("Transpose", &t);
        }
        _ => {
            eprintln!("Unknown mode: {}", mode);
            eprintln!("Usage: {} <addr> <mode> [args...]", args[0]);
            eprintln!("Modes:");
            eprintln!("  calc <op> <lhs> <rhs>    - op is one of add, sub, mult, div, mod");
            eprintln!("  mult <n>                 - Combine two sequential n×n matrices");
            eprintln!("  transpose <rows> <cols>  - Transpose a sequential rows×cols matrix");
            std::process::exit(1);
        }
    }

    Ok(())
}
