use calc_engine::{Request, Response};
use calc_server_types::calculator as pb;
use calc_server_types::calculator::calculator_server::{Calculator, CalculatorServer};
use tonic::Status;
use tracing::{debug, warn};

use crate::convert::{arithmetic_from_wire, matrix_to_wire, required_matrix, status_from_error};

/// gRPC front end for [`calc_engine::dispatch`].
///
/// Holds no state; every call decodes its request, runs the engine inline on
/// the runtime worker that received it and encodes the result.
#[derive(Debug, Clone, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    fn handle(&self, request: Request) -> Result<Response, Status> {
        let op = request.name();
        match calc_engine::dispatch(&request) {
            Ok(response) => {
                debug!(op, "request handled");
                Ok(response)
            }
            Err(err) => Err(reject(op, &err)),
        }
    }
}

fn reject(op: &str, err: &calc_engine::Error) -> Status {
    let status = status_from_error(err);
    warn!(op, code = ?status.code(), error = %err, "request rejected");
    status
}

fn rejected_input(op: &str, status: Status) -> Status {
    warn!(op, code = ?status.code(), error = status.message(), "request rejected");
    status
}

fn expect_matrix(response: Response) -> Result<pb::Matrix, Status> {
    match response {
        Response::Matrix(matrix) => Ok(matrix_to_wire(matrix)),
        Response::Value(_) => Err(Status::internal(
            "engine returned a scalar for a matrix operation",
        )),
    }
}

#[tonic::async_trait]
impl Calculator for CalculatorService {
    async fn calc(
        &self,
        request: tonic::Request<pb::ArithmeticOperation>,
    ) -> Result<tonic::Response<pb::CalcResponse>, Status> {
        let op = arithmetic_from_wire(request.get_ref()).map_err(|e| reject("calc", &e))?;

        match self.handle(Request::Arithmetic(op))? {
            Response::Value(value) => Ok(tonic::Response::new(pb::CalcResponse { value })),
            Response::Matrix(_) => Err(Status::internal(
                "engine returned a matrix for a scalar operation",
            )),
        }
    }

    async fn mult(
        &self,
        request: tonic::Request<pb::MultiplyRequest>,
    ) -> Result<tonic::Response<pb::Matrix>, Status> {
        let req = request.into_inner();
        let a = required_matrix(req.a, "a").map_err(|s| rejected_input("mult", s))?;
        let b = required_matrix(req.b, "b").map_err(|s| rejected_input("mult", s))?;

        let response = self.handle(Request::Multiply(a, b))?;
        Ok(tonic::Response::new(expect_matrix(response)?))
    }

    async fn transpose(
        &self,
        request: tonic::Request<pb::TransposeRequest>,
    ) -> Result<tonic::Response<pb::Matrix>, Status> {
        let req = request.into_inner();
        let matrix =
            required_matrix(req.matrix, "matrix").map_err(|s| rejected_input("transpose", s))?;

        let response = self.handle(Request::Transpose(matrix))?;
        Ok(tonic::Response::new(expect_matrix(response)?))
    }
}

pub fn create_server() -> CalculatorServer<CalculatorService> {
    CalculatorServer::new(CalculatorService::new())
}
