use crate::auth::use_auth;
use crate::components::icons::{Calendar, Mail, MapPin, Person, Trash};
use leptos::prelude::*;
use lostlinked::listing::delete_control_visible;
use lostlinked_shared::{Category, Item, ItemRef, ItemStatus};

fn category_badge(category: Category) -> &'static str {
    match category {
        Category::Electronics => "badge badge-secondary",
        Category::Clothing => "badge badge-accent",
        Category::Accessories => "badge badge-warning",
        Category::Documents => "badge badge-info",
        Category::Keys => "badge badge-success",
        Category::Bags => "badge badge-primary",
        Category::Other => "badge badge-ghost",
    }
}

/// 单条记录的卡片
///
/// 删除按钮只对已登录用户显示；确认与请求由 `on_delete` 的提供者负责。
#[component]
pub fn ItemCard(item: Item, on_delete: Callback<ItemRef>) -> impl IntoView {
    let auth = use_auth();
    let target = item.item_ref();
    let status = item.status();

    view! {
        <div class="card bg-base-100 shadow-md hover:shadow-xl transition-all duration-300">
            <div class="card-body p-6">
                <div class="flex justify-between items-start">
                    <h3 class="card-title text-xl">{item.item_name().to_string()}</h3>
                    <Show when=move || auth.state.with(delete_control_visible)>
                        <button
                            on:click=move |_| on_delete.run(target)
                            class="btn btn-ghost btn-sm btn-circle text-error"
                            title="Delete item"
                        >
                            <Trash attr:class="h-6 w-6" />
                        </button>
                    </Show>
                </div>

                <span class=category_badge(item.category())>{item.category().as_str()}</span>

                <p class="text-base-content/70">{item.description().to_string()}</p>

                <div class="space-y-2 text-sm">
                    <div class="flex items-center gap-2">
                        <MapPin attr:class="h-5 w-5 text-info" />
                        <span class="font-medium">"Location:"</span>
                        <span>{item.location().to_string()}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Calendar attr:class="h-5 w-5 text-success" />
                        <span class="font-medium">"Date:"</span>
                        <span>{item.date().to_string()}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Person attr:class="h-5 w-5 text-warning" />
                        <span class="font-medium">"Contact:"</span>
                        <span>{item.person_name().to_string()}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Mail attr:class="h-5 w-5 text-secondary" />
                        <span>{item.contact().to_string()}</span>
                    </div>
                </div>

                <div class="divider my-1"></div>
                <div>
                    <span class=if status == ItemStatus::Active {
                        "badge badge-success badge-sm font-semibold"
                    } else {
                        "badge badge-neutral badge-sm font-semibold"
                    }>{status.as_str().to_uppercase()}</span>
                </div>
            </div>
        </div>
    }
}
