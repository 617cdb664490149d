use maud::Markup;

use crate::models::store::AppContext;
use crate::predictor::{self, FormValues, Outcome};
use crate::render::{self, Banner};
use crate::schema::Disease;

/// One stateless request into the app: show a tab, or submit its form.
/// Showing a tab always starts from defaults, so switching tabs discards
/// any in-progress input.
#[derive(Debug)]
pub enum AppRequest {
    Show { tab: Disease },
    Submit { tab: Disease, values: FormValues },
}

/// Run one request cycle and render the resulting page.
///
/// A positive prediction renders error-styled, a negative one
/// success-styled, and a predict failure error-styled with the reason.
/// Failures never propagate past this function.
pub fn handle(ctx: &AppContext, request: AppRequest) -> Markup {
    match request {
        AppRequest::Show { tab } => render::page(tab, &FormValues::new(), None),
        AppRequest::Submit { tab, values } => {
            let banner = match predictor::run_prediction(ctx, tab, &values) {
                Ok(prediction) => {
                    let message = predictor::outcome_message(&prediction);
                    match prediction.outcome {
                        Outcome::Positive => Banner::Error(message),
                        Outcome::Negative => Banner::Success(message),
                    }
                }
                Err(err) => {
                    log::debug!("{} prediction failed: {}", tab.slug(), err);
                    Banner::Error(format!("Prediction failed: {}", err))
                }
            };
            render::page(tab, &values, Some(&banner))
        }
    }
}
