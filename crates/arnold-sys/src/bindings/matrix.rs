use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct MatrixApi => matrix {
        fn AiM4Identity() -> AtMatrix;
        fn AiM4Translation(t: *const AtVector) -> AtMatrix;
        fn AiM4RotationX(x: f32) -> AtMatrix;
        fn AiM4RotationY(y: f32) -> AtMatrix;
        fn AiM4RotationZ(z: f32) -> AtMatrix;
        fn AiM4Scaling(s: *const AtVector) -> AtMatrix;
        fn AiM4Frame(o: *const AtVector, u: *const AtVector, v: *const AtVector, w: *const AtVector) -> AtMatrix;
        fn AiM4PointByMatrixMult(m: *const AtMatrix, pin: *const AtVector) -> AtVector;
        fn AiM4HPointByMatrixMult(m: *const AtMatrix, pin: *const AtHPoint) -> AtHPoint;
        fn AiM4VectorByMatrixMult(m: *const AtMatrix, vin: *const AtVector) -> AtVector;
        fn AiM4VectorByMatrixTMult(m: *const AtMatrix, vin: *const AtVector) -> AtVector;
        fn AiM4Mult(ma: *const AtMatrix, mb: *const AtMatrix) -> AtMatrix;
        fn AiM4Transpose(min: *const AtMatrix) -> AtMatrix;
        fn AiM4Invert(min: *const AtMatrix) -> AtMatrix;
        fn AiM4Determinant(m: *const AtMatrix) -> f32;
        fn AiM4Lerp(t: f32, ma: *const AtMatrix, mb: *const AtMatrix) -> AtMatrix;
        fn AiM4IsIdentity(m: *const AtMatrix) -> bool;
        fn AiM4IsSingular(m: *const AtMatrix) -> bool;
    }
}
