use crate::auth::use_auth;
use crate::components::icons::{CheckCircle, Warning};
use crate::components::item_card::ItemCard;
use crate::components::spinner::Spinner;
use crate::components::toast::use_toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lostlinked::listing::{
    DELETE_CONFIRM, DELETE_FAILED, DELETE_SUCCEEDED, FETCH_FAILED, ItemBoard, delete_item,
    empty_message, fetch_listing,
};
use lostlinked::notify::Notification;
use lostlinked_shared::{Item, ItemKind, ItemRef};
use lostlinked::{ClientError, InFlight};

/// 列表页（首页与管理视图共用）
#[component]
pub fn HomePage(
    /// 管理视图只在标题处有所区别
    #[prop(optional)]
    admin: bool,
) -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (board, set_board) = signal(ItemBoard::new());
    let deletes = StoredValue::new(InFlight::<ItemRef>::new());

    // 挂载时加载一次
    let api = auth.api();
    spawn_local(async move {
        let result = fetch_listing(&api).await;
        if let Some(Err(e)) = set_board.try_update(|b| b.apply(result)) {
            log::error!("Error fetching items: {}", e);
            toaster.error(FETCH_FAILED);
        }
    });

    let on_delete = Callback::new(move |target: ItemRef| {
        let confirmed = window()
            .confirm_with_message(DELETE_CONFIRM)
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let api = auth.api();
        let inflight = deletes.get_value();
        spawn_local(async move {
            match delete_item(&api, &inflight, target).await {
                Ok(deleted) => {
                    toaster.success(DELETE_SUCCEEDED);
                    set_board.try_update(|b| b.remove(deleted));
                }
                // 重复点击，第一次的请求仍在进行
                Err(ClientError::Busy(_)) => {}
                Err(e) => toaster.notify(Notification::from_error(&e, DELETE_FAILED)),
            }
        });
    });

    let column = move |kind: ItemKind| {
        let (header_class, subtitle) = match kind {
            ItemKind::Lost => (
                "alert alert-error alert-soft border-l-4 mb-6",
                "Items that people have lost",
            ),
            ItemKind::Found => (
                "alert alert-success alert-soft border-l-4 mb-6",
                "Items that have been found",
            ),
        };

        view! {
            <div>
                <div class=header_class>
                    <div>
                        <h2 class="text-2xl font-bold flex items-center gap-2">
                            {match kind {
                                ItemKind::Lost => view! { <Warning attr:class="h-8 w-8" /> }.into_any(),
                                ItemKind::Found => view! { <CheckCircle attr:class="h-8 w-8" /> }.into_any(),
                            }}
                            {format!("{} Items", kind.label())}
                            " (" {move || board.with(|b| b.count(kind))} ")"
                        </h2>
                        <p class="mt-1">{subtitle}</p>
                    </div>
                </div>

                <div class="space-y-4">
                    <Show
                        when=move || board.with(|b| b.count(kind) > 0)
                        fallback=move || view! {
                            <div class="card bg-base-100 shadow p-8 text-center text-base-content/50">
                                <p>{empty_message(kind)}</p>
                            </div>
                        }
                    >
                        <For
                            each=move || board.with(|b| b.column(kind))
                            key=|item: &Item| item.item_ref()
                            children=move |item| view! { <ItemCard item=item on_delete=on_delete /> }
                        />
                    </Show>
                </div>
            </div>
        }
    };

    view! {
        <Show when=move || !board.with(ItemBoard::is_loading) fallback=|| view! { <Spinner /> }>
            <div class="container mx-auto px-4 py-8">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold mb-2">
                        {if admin { "Manage Lost & Found Items" } else { "Lost & Found Items" }}
                    </h1>
                    <p class="text-base-content/70">"Help reunite people with their belongings"</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {column(ItemKind::Lost)}
                    {column(ItemKind::Found)}
                </div>
            </div>
        </Show>
    }
}
