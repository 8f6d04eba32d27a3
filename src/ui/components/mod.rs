//! Presentational widgets. Each one draws into the buffer and registers its
//! accessibility element on the [`Surface`](crate::ui::surface::Surface).

mod alert;
mod badge;
mod button;
mod card;
mod form;

pub use alert::{Alert, CLOSE_ALERT_LABEL};
pub use badge::{Badge, REMOVE_LABEL};
pub use button::{Button, SPINNER_FRAMES};
pub use card::{Card, CardBody, CardDescription, CardFooter, CardHeader, CardTitle};
pub use form::{
    Checkbox, FormControl, FormGroup, Input, Radio, Select, SelectOption, TextArea,
};
