mod discovery;
mod error;
mod state;
mod value;

pub use discovery::list_destination_states;
pub use error::StateError;
pub use state::{
    FileStateLoader, ResourceMode, State, StateLoader, StateModule, StateResource, StateValues,
};
pub use value::AttributeValue;
