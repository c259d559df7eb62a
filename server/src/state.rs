use idtoken::extract::ValidatorProvider;
use idtoken::IdTokenValidator;
use std::sync::Arc;

//--------------------------------------------------------------------------------------------------
// State given to the handlers
//--------------------------------------------------------------------------------------------------

pub type StateRef = Arc<State>;

#[derive(Clone)]
pub struct State {
    validator: IdTokenValidator,
}

impl State {
    pub fn new(validator: IdTokenValidator) -> Self {
        Self { validator }
    }
}

impl ValidatorProvider for State {
    fn id_token_validator(&self) -> &IdTokenValidator {
        &self.validator
    }
}

//--------------------------------------------------------------------------------------------------
