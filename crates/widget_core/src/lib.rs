pub mod fetch;
pub mod render;
pub mod transform;
pub mod widget;

pub use fetch::{
    ApiEndpoint, HttpCapability, MissingHttpCapability, ReqwestHttp, RequestOptions, WireResponse,
};
pub use render::{render, render_error, render_loader, render_pets};
pub use transform::{categorize, sort_by_name};
pub use widget::{BufferTarget, RenderState, RenderTarget, RosterWidget, WidgetConfig};
