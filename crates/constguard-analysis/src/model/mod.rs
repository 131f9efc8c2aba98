//! In-memory class model handed over by a class-model provider.

pub mod class;
pub mod descriptor;

pub use class::{
    AnnotationElement, ClassModel, ElementValue, FieldModel, MethodModel, RawAnnotation,
    RawConstant,
};
pub use descriptor::DeclaredType;
