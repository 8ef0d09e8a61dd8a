// SPDX-License-Identifier: MPL-2.0

/// 구조체 선언 하나에 대한 [`StructView`](crate::data::StructView) 래퍼 타입을 선언합니다.
///
/// 생성자와 비교, 해시, 디버그 출력은 모두 내부 뷰에 위임됩니다. 필드 접근자는 각 모듈에서
/// 따로 구현합니다.
macro_rules! facade {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($spec:path);
    ) => {
        $(#[$meta])*
        $vis struct $name<B>($crate::data::StructView<B>);

        impl<'a> $name<&'a [u8]> {
            /// 빌린 버퍼를 읽기 전용으로 해석합니다.
            pub fn view(buf: &'a [u8], options: $crate::Options) -> Result<Self, $crate::Error> {
                $crate::data::StructView::new(buf, &$spec, options).map(Self)
            }
        }

        impl<'a> $name<&'a mut [u8]> {
            /// 빌린 버퍼를 해석하며 필드를 수정하면 버퍼에 바로 반영됩니다.
            pub fn view_mut(
                buf: &'a mut [u8],
                options: $crate::Options,
            ) -> Result<Self, $crate::Error> {
                $crate::data::StructView::new(buf, &$spec, options).map(Self)
            }
        }

        impl $name<Vec<u8>> {
            /// 모든 필드가 기본값인 구조체를 할당합니다.
            pub fn new(options: $crate::Options) -> Result<Self, $crate::Error> {
                $crate::data::StructView::alloc(&$spec, options).map(Self)
            }

            /// 다른 버전의 구조체를 지정된 설정으로 복사합니다.
            pub fn copy_from<C: AsRef<[u8]>>(
                options: $crate::Options,
                src: &$name<C>,
            ) -> Result<Self, $crate::Error> {
                $crate::data::StructView::copy_from(&src.0, options).map(Self)
            }
        }

        impl<B: AsRef<[u8]>> $name<B> {
            pub fn version(&self) -> $crate::layout::Version {
                self.0.version()
            }

            /// 필드가 협상된 버전의 레이아웃에 있는지 확인합니다.
            pub fn is_available(&self, name: &str) -> bool {
                self.0.is_available(name)
            }

            /// 정수 필드를 기본값 없이 읽습니다.
            ///
            /// 필드가 협상된 버전에 없으면 [`Error::UnsupportedForVersion`]을 반환합니다.
            ///
            /// [`Error::UnsupportedForVersion`]: $crate::Error::UnsupportedForVersion
            pub fn try_raw(&self, name: &str) -> Result<u64, $crate::Error> {
                self.0.try_raw(name)
            }

            pub fn as_view(&self) -> &$crate::data::StructView<B> {
                &self.0
            }

            pub fn into_view(self) -> $crate::data::StructView<B> {
                self.0
            }
        }

        impl<B: AsRef<[u8]>, C: AsRef<[u8]>> PartialEq<$name<C>> for $name<B> {
            fn eq(&self, other: &$name<C>) -> bool {
                self.0 == other.0
            }
        }

        impl<B: AsRef<[u8]>> Eq for $name<B> {}

        impl<B: AsRef<[u8]>> std::hash::Hash for $name<B> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.0, state)
            }
        }

        impl<B: AsRef<[u8]>> std::fmt::Debug for $name<B> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl<B: AsRef<[u8]> + Clone> Clone for $name<B> {
            fn clone(&self) -> Self {
                Self(self.0.clone())
            }
        }
    };
}
