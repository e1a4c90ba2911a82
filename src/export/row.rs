use crate::Address;
use crate::Utility;
use crate::game::Action;
use crate::game::State;

/// One exported (state, action) value.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Row {
    pub state_address: Address,
    pub num_out: i32,
    pub player: i32,
    pub is_first: bool,
    pub action: Action,
    pub value: Utility,
}

impl Row {
    pub const fn header() -> &'static str {
        "state_address,num_out,player,is_first,action,value"
    }
    pub fn csv(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.state_address, self.num_out, self.player, self.is_first, self.action, self.value
        )
    }
}

impl From<(Address, State, Action, Utility)> for Row {
    fn from((state_address, state, action, value): (Address, State, Action, Utility)) -> Self {
        Self {
            state_address,
            num_out: state.out(),
            player: state.player(),
            is_first: state.first(),
            action,
            value,
        }
    }
}
