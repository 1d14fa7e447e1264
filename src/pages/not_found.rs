use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 0 1.5rem;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        color: #fff;
                    }
                    .not-found p {
                        color: #a0a0a0;
                    }
                    .not-found a {
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #3a1c71, #4776e6);
                        color: #fff;
                        text-decoration: none;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page drifted out of orbit."}</p>
            <Link<Route> to={Route::Home}>{"Back to Kodastra"}</Link<Route>>
        </div>
    }
}
