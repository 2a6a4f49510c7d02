use std::net::SocketAddr;
use std::time::Duration;

use calc_client::{CalcClient, Error};
use calc_engine::{BinaryOperation, Matrix};
use calc_server_types::calculator as pb;
use calc_server_types::calculator::calculator_client::CalculatorClient;
use rand::Rng;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tonic::Code;

async fn start_test_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = calc_server::grpc::create_server();

    let handle = tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(server)
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    sleep(Duration::from_millis(100)).await;
    (addr, handle)
}

async fn connect() -> CalcClient {
    let (addr, _handle) = start_test_server().await;
    CalcClient::connect(addr).await.unwrap()
}

#[tokio::test]
async fn test_calc() {
    let client = connect().await;

    assert_eq!(client.calc(BinaryOperation::Addition, 2.0, 3.0).await.unwrap(), 5.0);
    assert_eq!(client.calc(BinaryOperation::Subtraction, 5.0, 2.0).await.unwrap(), 3.0);
    assert_eq!(client.calc(BinaryOperation::Multiplication, 4.0, 5.0).await.unwrap(), 20.0);
    assert_eq!(client.calc(BinaryOperation::Division, 10.0, 2.0).await.unwrap(), 5.0);
    assert_eq!(client.calc(BinaryOperation::Modulus, 5.0, 3.0).await.unwrap(), 2.0);
    assert_eq!(client.calc(BinaryOperation::Modulus, -5.0, 3.0).await.unwrap(), -2.0);
}

#[tokio::test]
async fn test_calc_zero_divisor() {
    let client = connect().await;

    let err = client.calc(BinaryOperation::Division, 0.0, 0.0).await.unwrap_err();
    assert!(matches!(err, Error::Arithmetic(ref m) if m == "Division by zero error!"));

    let err = client.calc(BinaryOperation::Modulus, 7.0, 0.0).await.unwrap_err();
    assert!(matches!(err, Error::Arithmetic(ref m) if m == "Modulus by zero error!"));
}

#[tokio::test]
async fn test_calc_invalid_operator() {
    let client = connect().await;

    for tag in [0, 6, -3] {
        let err = client.calc_raw(tag, 1.0, 2.0).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Invalid binary operator provided!"));
        assert!(matches!(err, Error::Arithmetic(_)));
    }
}

#[tokio::test]
async fn test_mult() {
    let client = connect().await;

    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();

    let c = client.mult(&a, &b).await.unwrap();
    assert_eq!(c.into_data(), vec![vec![15.0, 17.0], vec![19.0, 21.0]]);
}

#[tokio::test]
async fn test_mult_invalid_dimensions() {
    let client = connect().await;

    let a = Matrix::sequential(2, 3);
    let b = Matrix::sequential(2, 3);

    let err = client.mult(&a, &b).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Matrix(ref m) if m == "Matrices have invalid dimensions for multiplication!"
    ));
}

#[tokio::test]
async fn test_transpose() {
    let client = connect().await;

    let a = Matrix::sequential(2, 3);
    let t = client.transpose(&a).await.unwrap();
    assert_eq!(t.data(), &[vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);

    let empty = Matrix::new(0, 4, Vec::new()).unwrap();
    let t = client.transpose(&empty).await.unwrap();
    assert_eq!((t.rows(), t.cols()), (4, 0));
}

#[tokio::test]
async fn test_malformed_requests() {
    let (addr, _handle) = start_test_server().await;
    let mut client = CalculatorClient::connect(format!("http://{}", addr))
        .await
        .unwrap();

    let status = client
        .mult(pb::MultiplyRequest { a: None, b: None })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "malformed request: missing field `a`");

    let ragged = pb::Matrix {
        rows: 2,
        cols: 2,
        data: vec![pb::Row { values: vec![1.0, 2.0] }],
    };
    let status = client
        .transpose(pb::TransposeRequest { matrix: Some(ragged) })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(status.message().starts_with("malformed request: "));
}

#[tokio::test]
async fn test_concurrent_requests() {
    let client = connect().await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let client = client.clone();
        let (rows, cols, data) = {
            let mut rng = rand::thread_rng();
            let rows = rng.gen_range(1..6);
            let cols = rng.gen_range(1..6);
            let data: Vec<Vec<f64>> = (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_range(-10.0..10.0)).collect())
                .collect();
            (rows, cols, data)
        };
        let a = Matrix::new(rows, cols, data).unwrap();

        handles.push(tokio::spawn(async move {
            let t = client.transpose(&a).await.unwrap();
            let back = client.transpose(&t).await.unwrap();
            assert_eq!(back, a);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_unbacked_matrix_width_is_rejected() {
    let (addr, _handle) = start_test_server().await;
    let mut client = CalculatorClient::connect(format!("http://{}", addr))
        .await
        .unwrap();

    let wide = pb::Matrix {
        rows: 0,
        cols: 1 << 40,
        data: Vec::new(),
    };
    let status = client
        .transpose(pb::TransposeRequest { matrix: Some(wide) })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(status.message().starts_with("malformed request: "));

    let response = client
        .calc(pb::ArithmeticOperation {
            op: pb::BinaryOperation::Addition as i32,
            lh_term: 1.0,
            rh_term: 1.0,
        })
        .await
        .unwrap();
    assert_eq!(response.into_inner().value, 2.0);
}
