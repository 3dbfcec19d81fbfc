//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Every payment and payout handler answers `200 OK` with the engine's outcome envelope;
//! failures travel inside the envelope, not as HTTP errors. Only malformed requests surface as
//! 4xx, via actix's JSON extractor.
use actix_web::{get, post, web, HttpResponse, Responder};
use log::*;
use momo_tools::{parse_provider_amount, DisbursementCallback};
use soko_payment_engine::{
    traits::{AggregatorClient, SellerStore, TokenProvider},
    PaymentApi,
    PayoutApi,
};

use crate::data_objects::{InitiatePaymentParams, JsonResponse, PayoutParams};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// --------------------------------------------   Payments  ----------------------------------------------------
route!(initiate_payment => Post "/payments" impl AggregatorClient, TokenProvider);
pub async fn initiate_payment<TAggregatorClient, TTokenProvider>(
    api: web::Data<PaymentApi<TAggregatorClient, TTokenProvider>>,
    body: web::Json<InitiatePaymentParams>,
) -> HttpResponse
where
    TAggregatorClient: AggregatorClient + 'static,
    TTokenProvider: TokenProvider + 'static,
{
    let params = body.into_inner();
    debug!("💰️ Payment initiation request for order {}", params.payload.order_id);
    let outcome = api.initiate_payment(&params.method, &params.payload).await;
    HttpResponse::Ok().json(outcome)
}

// ---------------------------------------------   Payouts  ----------------------------------------------------
route!(request_payout => Post "/payouts" impl SellerStore, AggregatorClient, TokenProvider);
pub async fn request_payout<TSellerStore, TAggregatorClient, TTokenProvider>(
    api: web::Data<PayoutApi<TSellerStore, TAggregatorClient, TTokenProvider>>,
    body: web::Json<PayoutParams>,
) -> HttpResponse
where
    TSellerStore: SellerStore + 'static,
    TAggregatorClient: AggregatorClient + 'static,
    TTokenProvider: TokenProvider + 'static,
{
    let params = body.into_inner();
    debug!("🏧️ Payout request of {} for seller {}", params.amount, params.seller_id);
    let outcome = api.send_payout(params.seller_id, params.amount).await;
    HttpResponse::Ok().json(outcome)
}

// --------------------------------------------   Callbacks  ---------------------------------------------------
/// Acknowledges the aggregator's asynchronous disbursement notification.
///
/// Balance reconciliation happens downstream of the escrow ledger; this route's job is to log
/// the signal against the reference and answer quickly so the provider stops redelivering.
#[post("/callback/disbursement")]
pub async fn disbursement_callback(body: web::Json<DisbursementCallback>) -> HttpResponse {
    let notice = body.into_inner();
    if notice.success {
        let amount = notice
            .amount
            .as_deref()
            .and_then(|a| parse_provider_amount(a).ok())
            .map(|a| a.to_string())
            .unwrap_or_else(|| "unknown amount".to_string());
        info!(
            "📥️ Disbursement {} ({amount}) confirmed by provider. txid: {}",
            notice.reference,
            notice.transaction_id.as_deref().unwrap_or("-")
        );
    } else {
        warn!("📥️ Disbursement {} failed at provider. {}", notice.reference, notice.message);
    }
    HttpResponse::Ok().json(JsonResponse::success("Callback received"))
}
